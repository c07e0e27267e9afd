use crate::version::Scheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for version-bump.
///
/// Covers the backing files, the release scheme, and the optional git side
/// effects performed after a bump.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_version_file() -> String {
    "version.json".to_string()
}

/// Paths of the files a release touches.
///
/// `changelog` is optional; when absent the changelog splice is skipped
/// entirely.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilesConfig {
    #[serde(default = "default_version_file")]
    pub version: String,

    #[serde(default)]
    pub changelog: Option<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            version: default_version_file(),
            changelog: None,
        }
    }
}

/// Configuration of the version record itself.
///
/// `releases_url` is the base URL used for the changelog's link-reference
/// lines; it must be set when a changelog is configured.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ReleaseConfig {
    #[serde(default)]
    pub scheme: Scheme,

    #[serde(default)]
    pub releases_url: String,
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_commit_message() -> String {
    "chore: creating version {version}".to_string()
}

/// Configuration for the git side effects.
///
/// Disabled by default; when enabled, a successful bump stages the release
/// files, commits, and tags. `{version}` in the patterns is replaced with the
/// new version string.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GitConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            enabled: false,
            tag_pattern: default_tag_pattern(),
            commit_message: default_commit_message(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionbump.toml` in current directory
/// 3. `.versionbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./versionbump.toml").exists() {
        fs::read_to_string("./versionbump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".versionbump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

use crate::error::{BumpError, Result};
use crate::version::{Scheme, Version};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const MAJOR_KEY: &str = "BUILD_MAJOR_VERSION";
const MINOR_KEY: &str = "BUILD_MINOR_VERSION";
const PATCH_KEY: &str = "BUILD_PATCH_VERSION";

/// The persisted version record together with the rest of its JSON document.
///
/// The version file is a plain JSON object; keys other than the version
/// fields are kept in memory so a rewrite does not lose them, and key order
/// matches the file on disk.
pub struct VersionFile {
    path: PathBuf,
    document: Map<String, Value>,
    version: Version,
}

impl VersionFile {
    /// Reads and parses the version file.
    ///
    /// The scheme decides which fields are required: `BUILD_MAJOR_VERSION`
    /// and `BUILD_MINOR_VERSION` always, `BUILD_PATCH_VERSION` only for
    /// [Scheme::MajorMinorPatch].
    ///
    /// # Returns
    /// * `Ok(VersionFile)` - Parsed file with its current version
    /// * `Err` - If the file is unreadable, not a JSON object, or a required
    ///   field is missing or not a non-negative integer
    pub fn load(path: &Path, scheme: Scheme) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let document = match serde_json::from_str(&text)? {
            Value::Object(map) => map,
            _ => {
                return Err(BumpError::parse(format!(
                    "{}: expected a JSON object",
                    path.display()
                )))
            }
        };

        let major = read_field(&document, MAJOR_KEY)?;
        let minor = read_field(&document, MINOR_KEY)?;
        let patch = match scheme {
            Scheme::MajorMinorPatch => Some(read_field(&document, PATCH_KEY)?),
            Scheme::MajorMinor => None,
        };

        Ok(VersionFile {
            path: path.to_path_buf(),
            document,
            version: Version::new(major, minor, patch),
        })
    }

    /// The version currently recorded in the file.
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the backing file with `next`.
    ///
    /// Only the version fields are updated; all other keys are written back
    /// unchanged in their original order. The write replaces the whole file
    /// in one call and is not atomic.
    pub fn write(&mut self, next: Version) -> Result<()> {
        self.document
            .insert(MAJOR_KEY.to_string(), next.major.into());
        self.document
            .insert(MINOR_KEY.to_string(), next.minor.into());
        if let Some(patch) = next.patch {
            self.document.insert(PATCH_KEY.to_string(), patch.into());
        }

        fs::write(&self.path, render(&self.document)?)?;
        self.version = next;
        Ok(())
    }
}

// 4-space indentation, matching the hand-maintained layout of version.json.
fn render(document: &Map<String, Value>) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| BumpError::parse(e.to_string()))
}

fn read_field(document: &Map<String, Value>, key: &str) -> Result<u32> {
    let value = document
        .get(key)
        .ok_or_else(|| BumpError::parse(format!("missing field '{}'", key)))?;
    let number = value.as_u64().ok_or_else(|| {
        BumpError::parse(format!("field '{}' must be a non-negative integer", key))
    })?;
    u32::try_from(number).map_err(|_| BumpError::parse(format!("field '{}' is out of range", key)))
}

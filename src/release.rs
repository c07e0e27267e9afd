use crate::changelog::{self, SpliceOutcome};
use crate::config::Config;
use crate::error::{BumpError, Result};
use crate::git::Vcs;
use crate::version::{BumpKind, Version};
use crate::version_file::VersionFile;
use chrono::NaiveDate;
use std::path::Path;

/// What a release run computed and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseReport {
    pub previous: Version,
    pub next: Version,
    /// `None` when no changelog is configured or the run was a dry run.
    pub splice: Option<SpliceOutcome>,
}

/// Runs the file side of a release.
///
/// Read the version record, compute the next version, then persist it and
/// splice the changelog. Under `dry_run` the computation still happens but
/// both writes are skipped, leaving the files byte-identical.
///
/// The stages run strictly in order and the first error aborts the run; an
/// already-written version file is not rolled back when a later stage fails.
pub fn run(config: &Config, kind: BumpKind, dry_run: bool, today: NaiveDate) -> Result<ReleaseReport> {
    if config.files.changelog.is_some() && config.release.releases_url.is_empty() {
        return Err(BumpError::config(
            "release.releases_url must be set when files.changelog is configured",
        ));
    }

    let mut file = VersionFile::load(Path::new(&config.files.version), config.release.scheme)?;
    let previous = file.version();
    let next = previous.bump(kind)?;

    if !dry_run {
        file.write(next)?;
    }

    let splice = match &config.files.changelog {
        Some(changelog_path) if !dry_run => Some(changelog::splice_file(
            Path::new(changelog_path),
            &next.to_string(),
            today,
            &config.release.releases_url,
        )?),
        _ => None,
    };

    Ok(ReleaseReport {
        previous,
        next,
        splice,
    })
}

/// Stages the release files, commits, and tags, in that order.
///
/// `{version}` in the configured commit message and tag pattern is replaced
/// with the new version string. Any failure aborts the remaining steps.
pub fn tag_release(vcs: &dyn Vcs, config: &Config, version: &Version) -> Result<()> {
    let version_string = version.to_string();

    let mut paths: Vec<&str> = vec![config.files.version.as_str()];
    if let Some(changelog_path) = &config.files.changelog {
        paths.push(changelog_path.as_str());
    }

    vcs.stage_files(&paths)?;
    vcs.commit(
        &config
            .git
            .commit_message
            .replace("{version}", &version_string),
    )?;
    vcs.tag(&config.git.tag_pattern.replace("{version}", &version_string))?;
    Ok(())
}

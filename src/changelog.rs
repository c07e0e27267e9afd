use crate::error::{BumpError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::Path;

/// What the splice did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// A dated release heading was inserted after `## Unreleased`.
    Inserted,
    /// No `## Unreleased` heading was found; only the link line was appended.
    HeadingNotFound,
}

/// Turns the "Unreleased" section of a changelog into a dated release.
///
/// Scans for a line starting with `## Unreleased` (trailing characters
/// allowed) and inserts a blank line plus `## [<version>] - <date>` right
/// after the first match; later matches are left alone. Every other line is
/// copied unchanged, and a `[<version>]: <releases_url>/v<version>` link
/// reference is appended at the end.
///
/// A document without an `## Unreleased` heading only gets the link line.
pub fn splice(
    content: &str,
    version: &str,
    date: NaiveDate,
    releases_url: &str,
) -> Result<(String, SpliceOutcome)> {
    let heading = Regex::new(r"^## Unreleased").map_err(|e| BumpError::changelog(e.to_string()))?;

    let mut out = String::with_capacity(content.len() + 128);
    let mut outcome = SpliceOutcome::HeadingNotFound;

    for line in content.lines() {
        out.push_str(line);
        out.push('\n');

        if outcome == SpliceOutcome::HeadingNotFound && heading.is_match(line) {
            out.push('\n');
            out.push_str(&format!("## [{}] - {}\n", version, date.format("%Y-%m-%d")));
            outcome = SpliceOutcome::Inserted;
        }
    }

    out.push_str(&format!("[{}]: {}/v{}\n", version, releases_url, version));

    Ok((out, outcome))
}

/// Applies [splice] to a changelog file in place.
pub fn splice_file(
    path: &Path,
    version: &str,
    date: NaiveDate,
    releases_url: &str,
) -> Result<SpliceOutcome> {
    let content = fs::read_to_string(path)?;
    let (updated, outcome) = splice(&content, version, date, releases_url)?;
    fs::write(path, updated)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASES_URL: &str = "https://github.com/example/demo/releases";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_splice_inserts_after_unreleased() {
        let content = "## Unreleased\n\n### Fixed\n- bug\n";
        let (updated, outcome) = splice(content, "1.3.0", date(), RELEASES_URL).unwrap();

        assert_eq!(outcome, SpliceOutcome::Inserted);
        assert_eq!(
            updated,
            "## Unreleased\n\n## [1.3.0] - 2024-01-15\n\n### Fixed\n- bug\n\
             [1.3.0]: https://github.com/example/demo/releases/v1.3.0\n"
        );
    }

    #[test]
    fn test_splice_allows_trailing_characters_on_heading() {
        let content = "## Unreleased changes\n- item\n";
        let (updated, outcome) = splice(content, "2.0.0", date(), RELEASES_URL).unwrap();

        assert_eq!(outcome, SpliceOutcome::Inserted);
        assert!(updated.starts_with("## Unreleased changes\n\n## [2.0.0] - 2024-01-15\n"));
    }

    #[test]
    fn test_splice_only_first_match() {
        let content = "## Unreleased\n- a\n## Unreleased\n- b\n";
        let (updated, _) = splice(content, "1.0.1", date(), RELEASES_URL).unwrap();

        assert_eq!(updated.matches("## [1.0.1] - 2024-01-15").count(), 1);
        // The second heading survives untouched, right before its own entry.
        assert!(updated.contains("- a\n## Unreleased\n- b\n"));
    }

    #[test]
    fn test_splice_without_heading_appends_link_only() {
        let content = "# Changelog\n\n## [1.2.0] - 2023-11-02\n- old\n";
        let (updated, outcome) = splice(content, "1.3.0", date(), RELEASES_URL).unwrap();

        assert_eq!(outcome, SpliceOutcome::HeadingNotFound);
        assert_eq!(
            updated,
            "# Changelog\n\n## [1.2.0] - 2023-11-02\n- old\n\
             [1.3.0]: https://github.com/example/demo/releases/v1.3.0\n"
        );
    }

    #[test]
    fn test_splice_preserves_line_order() {
        let content = "# Changelog\n\n## Unreleased\n\n### Added\n- x\n\n## [0.1.0] - 2023-01-01\n- y\n\n[0.1.0]: url/v0.1.0\n";
        let (updated, _) = splice(content, "0.2.0", date(), RELEASES_URL).unwrap();

        let original_lines: Vec<&str> = content.lines().collect();
        let updated_lines: Vec<&str> = updated.lines().collect();

        // Removing the two inserted lines and the appended link line yields
        // the original document.
        let mut stripped: Vec<&str> = updated_lines
            .iter()
            .copied()
            .filter(|line| *line != "## [0.2.0] - 2024-01-15" && *line != "[0.2.0]: https://github.com/example/demo/releases/v0.2.0")
            .collect();
        // One blank line was inserted along with the heading.
        let unreleased_index = stripped
            .iter()
            .position(|line| line.starts_with("## Unreleased"))
            .unwrap();
        stripped.remove(unreleased_index + 1);

        assert_eq!(stripped, original_lines);
    }

    #[test]
    fn test_splice_two_field_version() {
        let content = "## Unreleased\n- change\n";
        let (updated, _) = splice(content, "1.0", date(), RELEASES_URL).unwrap();

        assert!(updated.contains("## [1.0] - 2024-01-15"));
        assert!(updated.ends_with("[1.0]: https://github.com/example/demo/releases/v1.0\n"));
    }
}

use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which version fields the backing file carries.
///
/// Some projects track `major.minor.patch`, others only `major.minor`. The
/// scheme decides which fields must be present in the version file and which
/// bump kinds are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    #[default]
    MajorMinorPatch,
    MajorMinor,
}

/// A version as stored in the version file.
///
/// `patch` is `None` under the [Scheme::MajorMinor] scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

/// Which version component to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Creates a new Version with the specified components.
    pub fn new(major: u32, minor: u32, patch: Option<u32>) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Computes the next version for a bump kind.
    ///
    /// Exactly one component is incremented; components above it are left
    /// untouched and components below it are reset to 0:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    ///
    /// A patch bump on a two-field version is an error, since that scheme has
    /// no patch component to increment.
    ///
    /// # Example
    /// ```
    /// # use version_bump::version::{BumpKind, Version};
    /// let v = Version::new(1, 2, Some(3));
    /// assert_eq!(v.bump(BumpKind::Minor).unwrap(), Version::new(1, 3, Some(0)));
    /// ```
    pub fn bump(&self, kind: BumpKind) -> Result<Version> {
        match kind {
            BumpKind::Major => Ok(Version {
                major: self.major + 1,
                minor: 0,
                patch: self.patch.map(|_| 0),
            }),
            BumpKind::Minor => Ok(Version {
                major: self.major,
                minor: self.minor + 1,
                patch: self.patch.map(|_| 0),
            }),
            BumpKind::Patch => match self.patch {
                Some(patch) => Ok(Version {
                    major: self.major,
                    minor: self.minor,
                    patch: Some(patch + 1),
                }),
                None => Err(BumpError::config(
                    "patch bumps are not available with the major-minor scheme",
                )),
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

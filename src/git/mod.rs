//! Version-control abstraction layer
//!
//! This module provides a trait-based abstraction over the git side effects
//! of a release, allowing for a real implementation and a mock for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Vcs] trait, which defines the three
//! operations a release performs. The concrete implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockVcs]: A recording implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [Vcs] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! # use version_bump::git::Vcs;
//! # fn example<V: Vcs>(vcs: &V) -> version_bump::Result<()> {
//! vcs.stage_files(&["version.json", "CHANGELOG.md"])?;
//! vcs.commit("chore: creating version 1.3.0")?;
//! vcs.tag("v1.3.0")?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockVcs;
pub use repository::Git2Repository;

use crate::error::Result;

/// Version-control side effects performed at the end of a release.
///
/// The three operations run in strict order: stage, commit, tag. A failure
/// in any of them aborts the rest; nothing is rolled back.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to [crate::error::BumpError].
pub trait Vcs {
    /// Stage the given paths, relative to the repository root.
    fn stage_files(&self, paths: &[&str]) -> Result<()>;

    /// Commit the staged files with the given message.
    fn commit(&self, message: &str) -> Result<()>;

    /// Create a lightweight tag with the given name on HEAD.
    fn tag(&self, name: &str) -> Result<()>;
}

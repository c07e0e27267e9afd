use crate::error::Result;
use crate::git::Vcs;
use std::cell::RefCell;

/// Mock VCS for testing without an actual git repository
///
/// Records every operation in call order; can be told to fail at a chosen
/// step to exercise the fail-fast behavior of the release pipeline.
pub struct MockVcs {
    calls: RefCell<Vec<String>>,
    fail_on: Option<&'static str>,
}

impl MockVcs {
    /// Create a new mock that succeeds on every operation
    pub fn new() -> Self {
        MockVcs {
            calls: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Create a mock whose named step ("stage", "commit", "tag") fails
    pub fn failing_on(step: &'static str) -> Self {
        MockVcs {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(step),
        }
    }

    /// The operations performed so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, step: &'static str, detail: &str) -> Result<()> {
        if self.fail_on == Some(step) {
            return Err(git2::Error::from_str(&format!("simulated {} failure", step)).into());
        }
        self.calls.borrow_mut().push(format!("{} {}", step, detail));
        Ok(())
    }
}

impl Default for MockVcs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcs for MockVcs {
    fn stage_files(&self, paths: &[&str]) -> Result<()> {
        self.record("stage", &paths.join(" "))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record("commit", message)
    }

    fn tag(&self, name: &str) -> Result<()> {
        self.record("tag", name)
    }
}

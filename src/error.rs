use thiserror::Error;

/// Unified error type for version-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Version file error: {0}")]
    Parse(String),

    #[error("Version file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Changelog error: {0}")]
    Changelog(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a version-file parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        BumpError::Parse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a changelog error with context
    pub fn changelog(msg: impl Into<String>) -> Self {
        BumpError::Changelog(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumpError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git() {
        let git_err = git2::Error::from_str("tag already exists");
        let err: BumpError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
    }

    #[test]
    fn test_error_constructors() {
        let error_pairs = vec![
            (BumpError::parse("x"), "Version file error"),
            (BumpError::config("x"), "Configuration error"),
            (BumpError::changelog("x"), "Changelog error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}

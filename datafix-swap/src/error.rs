//! Error types for fixture handling.
//!
//! Content errors (too few lines, non-numeric dimensions) are deterministic
//! and never worth retrying; I/O errors carry the offending path via `fs_err`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    /// The file has fewer lines than the swap rules index into.
    #[error("fixture has {found} line(s), at least {required} required")]
    TooFewLines { required: usize, found: usize },

    /// A dimension line is not an integer once encoding debris is stripped.
    #[error("line {} is not an integer: {content:?}", .index + 1)]
    InvalidNumber { index: usize, content: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FixtureError {
    /// True for problems with the file's contents rather than with reading or writing it.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            FixtureError::TooFewLines { .. } | FixtureError::InvalidNumber { .. }
        )
    }
}

pub type FixtureResult<T> = Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::FixtureError;

    #[test]
    fn invalid_number_reports_one_based_line() {
        let err = FixtureError::InvalidNumber {
            index: 1,
            content: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "line 2 is not an integer: \"abc\"");
        assert!(err.is_content_error());
    }

    #[test]
    fn io_is_not_a_content_error() {
        let err = FixtureError::from(std::io::Error::other("disk gone"));
        assert!(!err.is_content_error());
    }
}

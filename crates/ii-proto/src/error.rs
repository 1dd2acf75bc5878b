//! Error types for ii line parsing.

use thiserror::Error;

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Failure to read a join notification.
///
/// The offending line is preserved so callers can log it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The line does not contain exactly one `" has joined "` separator.
    #[error("not a join notification: {line:?}")]
    NotAJoin {
        /// The raw line.
        line: String,
    },

    /// The part before `" has joined "` is not `nick(hostmask)`.
    #[error("malformed nick/hostmask in join notification: {line:?}")]
    MalformedSource {
        /// The raw line.
        line: String,
    },
}

impl ParseError {
    /// The raw line that failed to parse.
    pub fn line(&self) -> &str {
        match self {
            Self::NotAJoin { line } | Self::MalformedSource { line } => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_contains_line() {
        let err = ParseError::NotAJoin {
            line: "alice has quit".to_string(),
        };
        assert!(err.to_string().contains("alice has quit"));
        assert_eq!(err.line(), "alice has quit");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParseError>();
    }
}

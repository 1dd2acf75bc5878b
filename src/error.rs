//! Unified error handling for iifriends.
//!
//! Every failure here is handled where it happens: logged, then either the
//! offending item is skipped or the invocation ends quietly. The types exist
//! so that each layer can report precisely what went wrong.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

// ============================================================================
// Directory Errors (friends file)
// ============================================================================

/// The friends file as a whole could not be read.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read friends file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single line of the friends file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("friend handle cannot be empty: {0:?}")]
    MissingHandle(String),
}

/// A hostmask glob could not be turned into a matcher.
#[derive(Debug, Error)]
#[error("hostmask pattern {pattern:?} failed to compile: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

// ============================================================================
// Dispatch Errors (ii `in` FIFO)
// ============================================================================

/// Errors that abort or degrade delivery of mode directives.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no reader attached to {} within {timeout:?}", .path.display())]
    OpenTimeout { path: PathBuf, timeout: Duration },

    #[error("{} is not a FIFO", .path.display())]
    NotFifo { path: PathBuf },

    #[error("write of {line:?} did not complete within {timeout:?}")]
    WriteTimeout { line: String, timeout: Duration },

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DispatchError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::OpenTimeout { .. } => "open_timeout",
            Self::NotFifo { .. } => "not_fifo",
            Self::WriteTimeout { .. } => "write_timeout",
            Self::Io { .. } => "io_error",
        }
    }
}

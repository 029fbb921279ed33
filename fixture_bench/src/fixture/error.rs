//!
//! Fixture loading error.
//!

use std::path::PathBuf;

///
/// Fixture loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the fixture file.
    #[error("Reading fixture file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the fixture file.
        path: PathBuf,
    },
    /// The discovery pattern is invalid.
    #[error("Fixture discovery pattern `{pattern}`: {error}")]
    Pattern {
        /// The underlying pattern error.
        error: glob::PatternError,
        /// The pattern.
        pattern: String,
    },
    /// The header or one of the records cannot be parsed.
    #[error("Malformed fixture file {path:?} at line {line}: {reason}")]
    Malformed {
        /// The path to the fixture file.
        path: PathBuf,
        /// The 1-based line number.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },
}

impl Error {
    ///
    /// A shortcut constructor.
    ///
    pub fn malformed(path: PathBuf, line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path,
            line,
            reason: reason.into(),
        }
    }

    ///
    /// The path of the offending fixture.
    ///
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Reading { path, .. } => path.as_path(),
            Self::Pattern { pattern, .. } => std::path::Path::new(pattern.as_str()),
            Self::Malformed { path, .. } => path.as_path(),
        }
    }
}

//!
//! Benchmark runner error.
//!

use std::path::PathBuf;

///
/// Benchmark runner error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The executable cannot be launched at all. No fixture can be benchmarked.
    #[error("Launching executable {executable:?}: {error}")]
    Launch {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: PathBuf,
    },
    /// The fixture cannot be opened as the standard input of the subject program.
    #[error("Opening fixture file {path:?} as standard input: {error}")]
    Stdin {
        /// The underlying IO error.
        error: std::io::Error,
        /// The fixture path.
        path: PathBuf,
    },
    /// Waiting for the subject program failed.
    #[error("Waiting for executable {executable:?}: {error}")]
    Waiting {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: PathBuf,
    },
}

impl Error {
    ///
    /// Whether the error makes the whole batch pointless.
    ///
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Stdin { .. })
    }
}

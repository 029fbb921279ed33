//!
//! A single timed invocation of the subject program.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A single timed invocation of the subject program.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// The 0-based trial index.
    pub index: usize,
    /// The wall-clock duration in seconds.
    pub seconds: f64,
    /// How the subject program exited.
    pub status: Status,
}

///
/// How the subject program exited.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The program exited with a zero status.
    Success,
    /// The program exited with a nonzero status or was killed by a signal.
    Failure {
        /// The exit code, if the program was not killed by a signal.
        code: Option<i32>,
    },
}

impl Trial {
    ///
    /// Whether the subject program exited successfully.
    ///
    pub fn is_success(&self) -> bool {
        matches!(self.status, Status::Success)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "exit status 0"),
            Self::Failure { code: Some(code) } => write!(f, "exit status {code}"),
            Self::Failure { code: None } => write!(f, "terminated by a signal"),
        }
    }
}

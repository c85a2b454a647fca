//! Launch error taxonomy.
//!
//! Two failure classes exist, each with a reserved exit code:
//! - [`LaunchError::RunnerNotFound`] — the package runner is absent from
//!   PATH. Exit 127 (POSIX "command not found").
//! - [`LaunchError::Spawn`] — any other failure to create the child.
//!   Exit 1, carrying the underlying cause when one is available.
//!
//! A child that started and then failed is not a launch error at all:
//! its exit status passes through untouched (see [`crate::spawn::ExitOutcome`]).

use thiserror::Error;

/// Exit code for a runner missing from PATH.
pub const EXIT_RUNNER_NOT_FOUND: i32 = 127;

/// Exit code for any other spawn failure.
pub const EXIT_SPAWN_FAILED: i32 = 1;

/// Failure to delegate to the package runner.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The package-runner executable could not be located.
    #[error("`{runner}` not found on PATH — install Node.js (https://nodejs.org), which provides {runner}, and try again")]
    RunnerNotFound { runner: String },

    /// The child process could not be started for any other reason
    /// (permissions, environment, resource limits, ...).
    #[error("failed to launch `{runner}`: {reason}")]
    Spawn { runner: String, reason: String },
}

impl LaunchError {
    pub fn runner_not_found(runner: impl Into<String>) -> Self {
        Self::RunnerNotFound {
            runner: runner.into(),
        }
    }

    /// Build a spawn failure from an underlying cause message.
    /// An empty cause degrades to a generic "unknown error" phrase.
    pub fn spawn(runner: impl Into<String>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::Spawn {
            runner: runner.into(),
            reason: if reason.trim().is_empty() {
                "unknown error".to_string()
            } else {
                reason
            },
        }
    }

    /// The process exit code this failure maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RunnerNotFound { .. } => EXIT_RUNNER_NOT_FOUND,
            Self::Spawn { .. } => EXIT_SPAWN_FAILED,
        }
    }
}

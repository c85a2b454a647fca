// SPDX-License-Identifier: MIT
//! Process spawning as a capability.
//!
//! [`Spawner`] is the seam between the delegation flow and real subprocess
//! creation: spawn a command with inherited standard streams, suspend until
//! it terminates, and report the outcome. Exactly one of spawn-failure or
//! termination fires per invocation.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tracing::debug;

use crate::error::LaunchError;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Normal termination with a numeric exit code.
    Exited(i32),
    /// Killed by a signal — no numeric code available.
    Signaled,
}

impl ExitOutcome {
    /// The launcher's own exit code for this outcome.
    ///
    /// A signal-terminated child reports no numeric code; the launcher
    /// deliberately falls back to 0 rather than failing on an ambiguous
    /// termination. This preserves the original tool's behavior.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exited(code) => *code,
            Self::Signaled => 0,
        }
    }
}

/// Spawns a command with inherited stdio and waits for it.
#[async_trait]
pub trait Spawner: Send + Sync {
    async fn spawn(&self, program: &Path, args: &[OsString]) -> Result<ExitOutcome, LaunchError>;
}

/// Production spawner: `tokio::process` with all three standard streams
/// connected directly to the parent's. Output appears to the end user
/// exactly as the child produces it, in real time.
#[derive(Debug, Default)]
pub struct InheritSpawner;

#[async_trait]
impl Spawner for InheritSpawner {
    async fn spawn(&self, program: &Path, args: &[OsString]) -> Result<ExitOutcome, LaunchError> {
        debug!(program = %program.display(), ?args, "spawning delegated command");

        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| classify_spawn_error(program, &e))?;

        // No timeout — wait for whatever the real tool does.
        let status = child
            .wait()
            .await
            .map_err(|e| LaunchError::spawn(program.to_string_lossy(), e.to_string()))?;

        match status.code() {
            Some(code) => Ok(ExitOutcome::Exited(code)),
            None => Ok(ExitOutcome::Signaled),
        }
    }
}

/// A NotFound at spawn time means the runner vanished between resolution
/// and exec — still the "missing runner" class, exit 127.
fn classify_spawn_error(program: &Path, err: &io::Error) -> LaunchError {
    if err.kind() == io::ErrorKind::NotFound {
        LaunchError::runner_not_found(program.to_string_lossy())
    } else {
        LaunchError::spawn(program.to_string_lossy(), err.to_string())
    }
}

//! PATH resolution for the package runner.
//!
//! The ambient PATH lookup is kept behind a trait so the delegation flow
//! can be tested without a real environment. The production impl uses the
//! `which` crate, which also handles PATHEXT on Windows (`npx` → `npx.cmd`).

use std::path::PathBuf;

use tracing::debug;

use crate::error::LaunchError;

/// Maps a logical tool name to a resolved executable path.
pub trait CommandResolver: Send + Sync {
    fn resolve(&self, tool: &str) -> Result<PathBuf, LaunchError>;
}

/// Resolver backed by the real PATH.
#[derive(Debug, Default)]
pub struct PathResolver;

impl CommandResolver for PathResolver {
    fn resolve(&self, tool: &str) -> Result<PathBuf, LaunchError> {
        match which::which(tool) {
            Ok(path) => {
                debug!(tool, path = %path.display(), "runner resolved");
                Ok(path)
            }
            Err(_) => Err(LaunchError::runner_not_found(tool)),
        }
    }
}

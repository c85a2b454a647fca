//! create-tambo-app — delegates to the latest published `tambo` CLI.
//!
//! The binary is a thin launcher: it resolves `npx` on PATH, runs
//! `npx -y tambo@latest create-app <args>` with inherited standard
//! streams, and mirrors the child's exit status as its own exit code.

pub mod error;
pub mod launcher;
pub mod resolver;
pub mod spawn;

pub use error::LaunchError;
pub use launcher::Launcher;
pub use resolver::{CommandResolver, PathResolver};
pub use spawn::{ExitOutcome, InheritSpawner, Spawner};

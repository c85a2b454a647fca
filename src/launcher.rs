// SPDX-License-Identifier: MIT
//! Version-delegation launcher.
//!
//! Builds the fixed delegated invocation — run the latest published
//! `tambo` package, subcommand `create-app` — appends the caller's
//! arguments verbatim, and drives it through the resolver and spawner
//! capabilities. Single-shot: no retries, no recovery, no state carried
//! between invocations.

use std::ffi::OsString;

use tracing::debug;

use crate::error::LaunchError;
use crate::resolver::CommandResolver;
use crate::spawn::{ExitOutcome, Spawner};

/// The package-runner executable looked up on PATH.
pub const RUNNER: &str = "npx";

/// Package spec requesting the latest published version.
pub const PACKAGE_SPEC: &str = "tambo@latest";

/// Fixed subcommand of the delegated tool.
pub const SUBCOMMAND: &str = "create-app";

/// The argument vector forwarded to the delegated tool: everything after
/// the program name, byte for byte.
///
/// Deliberately not an option parser — a lexer would swallow tokens like
/// the `--` positional-escape delimiter, and every token here belongs to
/// `tambo create-app`, not to the launcher.
pub fn forwarded_from_argv<I>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    argv.into_iter().skip(1).collect()
}

/// Full delegated argv: fixed prefix followed by the forwarded arguments,
/// in order, unmodified.
///
/// `-y` tells npx to fetch the package without an interactive prompt.
pub fn delegated_args(forwarded: &[OsString]) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        OsString::from("-y"),
        OsString::from(PACKAGE_SPEC),
        OsString::from(SUBCOMMAND),
    ];
    args.extend(forwarded.iter().cloned());
    args
}

/// Delegates one invocation to the versioned external tool.
pub struct Launcher<R, S> {
    resolver: R,
    spawner: S,
}

impl<R: CommandResolver, S: Spawner> Launcher<R, S> {
    pub fn new(resolver: R, spawner: S) -> Self {
        Self { resolver, spawner }
    }

    /// The spawner capability — exposed so tests can inspect a fake.
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Resolve the runner, spawn the delegated command with the forwarded
    /// arguments, and suspend until the child terminates.
    ///
    /// `Ok` carries the child's outcome (its exit status passes through as
    /// the launcher's own); `Err` means the child never started.
    pub async fn run(&self, forwarded: &[OsString]) -> Result<ExitOutcome, LaunchError> {
        let runner = self.resolver.resolve(RUNNER)?;
        let args = delegated_args(forwarded);
        debug!(runner = %runner.display(), args = args.len(), "delegating to {PACKAGE_SPEC} {SUBCOMMAND}");
        self.spawner.spawn(&runner, &args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv_capture_skips_only_program_name() {
        let argv: Vec<OsString> = ["create-tambo-app", "my-app", "--template", "default"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(
            forwarded_from_argv(argv),
            ["my-app", "--template", "default"]
                .iter()
                .map(OsString::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_argv_capture_keeps_double_dash() {
        let argv: Vec<OsString> = ["create-tambo-app", "--", "my-app", "-x"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(
            forwarded_from_argv(argv),
            ["--", "my-app", "-x"]
                .iter()
                .map(OsString::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_argv_capture_keeps_help_and_version_tokens() {
        let argv: Vec<OsString> = ["create-tambo-app", "--help", "-V"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(
            forwarded_from_argv(argv),
            ["--help", "-V"].iter().map(OsString::from).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_forwarded_args_preserved_verbatim() {
        let forwarded: Vec<OsString> = ["my-app", "--template", "default"]
            .iter()
            .map(OsString::from)
            .collect();
        let args = delegated_args(&forwarded);

        assert_eq!(args[0], OsString::from("-y"));
        assert_eq!(args[1], OsString::from(PACKAGE_SPEC));
        assert_eq!(args[2], OsString::from(SUBCOMMAND));
        // Trailing argument list equals the input exactly, in order.
        assert_eq!(&args[3..], forwarded.as_slice());
    }

    #[test]
    fn test_empty_forwarded_args_yield_fixed_prefix_only() {
        let args = delegated_args(&[]);
        assert_eq!(
            args,
            vec![
                OsString::from("-y"),
                OsString::from("tambo@latest"),
                OsString::from("create-app"),
            ]
        );
    }

    #[test]
    fn test_flag_like_args_not_interpreted() {
        let forwarded: Vec<OsString> = ["--help", "-y", "--", "-x"]
            .iter()
            .map(OsString::from)
            .collect();
        let args = delegated_args(&forwarded);
        assert_eq!(&args[3..], forwarded.as_slice());
    }

    #[test]
    fn test_construction_is_idempotent() {
        let forwarded: Vec<OsString> =
            ["my-app", "--template", "default"].iter().map(OsString::from).collect();
        assert_eq!(delegated_args(&forwarded), delegated_args(&forwarded));
    }
}

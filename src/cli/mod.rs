//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse arguments and global flags
//! - Resolve the fuzzy command token against the catalog
//! - Assemble the [`Invocation`] (paths, passthrough tokens, flags)
//! - Hand off to [`crate::launch`] for the real-world side effects
//!
//! The layer is thin: everything with decision logic lives in
//! [`crate::core`], everything with timing and OS interop in
//! [`crate::launch`].

pub mod args;

pub use args::Cli;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::CommandFactory;

use crate::config::Config;
use crate::core::catalog::Catalog;
use crate::core::invocation::Invocation;
use crate::core::resolve::resolve;
use crate::{desktop, git, launch};

/// Command token used when flags are given without one (`tgo -g`).
const DEFAULT_COMMAND: &str = ".";

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // Implicit help on the bare root command.
    if cli.extra.is_empty() && !cli.wants_launch() {
        Cli::command().print_long_help()?;
        return Ok(());
    }

    let catalog = Catalog::builtin();
    let config = Config::load().context("could not load configuration")?;
    let cwd = std::env::current_dir().context("could not determine current directory")?;

    let token = cli
        .extra
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_COMMAND);

    // Verbose mode is the lenient probe: unresolved tokens pass through.
    let command = resolve(&catalog, token, !cli.verbose)?;

    let mut paths = Vec::new();
    if cli.global {
        paths.push(git::repository_root(&cwd)?);
    }

    let mut passthrough = Vec::new();
    if let Some(msg) = &cli.msg {
        passthrough.push(format!("/logmsg:\"{msg}\""));
    }
    if let Some(url) = &cli.url {
        passthrough.push(format!("/url:\"{url}\""));
    }

    let (scanned_paths, scanned_args) = scan_targets(cli.extra.get(1..).unwrap_or(&[]))?;
    paths.extend(scanned_paths);
    passthrough.extend(scanned_args);
    passthrough.extend(config.extra_args.iter().cloned());

    let invocation = Invocation {
        command,
        paths,
        passthrough,
        verbose: cli.verbose,
        amend: cli.amend,
        force: cli.force,
    };

    let exe = launch::locate_tool(config.proc_path.as_deref());
    launch::run(
        &invocation,
        &cwd,
        &exe,
        &launch::ProcessLauncher,
        &desktop::native(),
    )?;
    Ok(())
}

/// Split the tokens after the command into paths and passthrough args.
///
/// A token naming an existing file or directory is a path (absolutized so
/// TortoiseGitProc is independent of its own working directory). The first
/// token starting with `-` or `/` ends path-scanning; it and everything
/// after it passes through verbatim. Anything else is a typo, not a path,
/// and aborts the run before a dialog opens on the wrong target.
fn scan_targets(extra: &[String]) -> Result<(Vec<PathBuf>, Vec<String>)> {
    let mut paths = Vec::new();
    let mut passthrough = Vec::new();

    for (index, arg) in extra.iter().enumerate() {
        let candidate = Path::new(arg);
        if candidate.exists() {
            paths.push(
                std::path::absolute(candidate)
                    .with_context(|| format!("could not absolutize path {arg}"))?,
            );
        } else if arg.starts_with('-') || arg.starts_with('/') {
            passthrough.extend(extra[index..].iter().cloned());
            break;
        } else {
            bail!("Mistyped argument? -- {arg}");
        }
    }

    Ok((paths, passthrough))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn existing_paths_are_collected_in_order() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();

        let (paths, passthrough) = scan_targets(&strings(&[
            file.to_str().unwrap(),
            dir.path().to_str().unwrap(),
        ]))
        .unwrap();

        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("a.txt"));
        assert!(passthrough.is_empty());
    }

    #[test]
    fn relative_paths_are_absolutized() {
        // The current directory itself always exists.
        let (paths, _) = scan_targets(&strings(&["."])).unwrap();
        assert!(paths[0].is_absolute());
    }

    #[test]
    fn slash_token_ends_scanning_and_passes_the_rest_through() {
        let dir = TempDir::new().unwrap();
        let (paths, passthrough) = scan_targets(&strings(&[
            dir.path().to_str().unwrap(),
            "/closeonend:0",
            "not-a-path-but-after-the-cut",
        ]))
        .unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(
            passthrough,
            strings(&["/closeonend:0", "not-a-path-but-after-the-cut"])
        );
    }

    #[test]
    fn dash_token_ends_scanning_too() {
        let (paths, passthrough) = scan_targets(&strings(&["-custom", "/more"])).unwrap();
        assert!(paths.is_empty());
        assert_eq!(passthrough, strings(&["-custom", "/more"]));
    }

    #[test]
    fn nonexistent_plain_token_is_a_mistyped_argument() {
        let err = scan_targets(&strings(&["definitely-not-a-path-xyz"])).unwrap_err();
        assert!(err
            .to_string()
            .contains("Mistyped argument? -- definitely-not-a-path-xyz"));
    }

    #[test]
    fn empty_input_scans_to_nothing() {
        let (paths, passthrough) = scan_targets(&[]).unwrap();
        assert!(paths.is_empty());
        assert!(passthrough.is_empty());
    }
}

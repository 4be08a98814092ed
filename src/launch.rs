//! launch
//!
//! Process launch and the post-launch foreground/keystroke protocol.
//!
//! # Protocol
//!
//! The orchestrator is a linear state machine with no retries:
//!
//! 1. Spawn TortoiseGitProc with the built argument list (failure is fatal)
//! 2. Sleep 300 ms to give the process time to create its window
//! 3. Enumerate all top-level windows once; every window whose title
//!    contains "TortoiseGit" is forced to the foreground, and the last
//!    match becomes the target
//! 4. No match: warn and stop (still a successful run)
//! 5. Depending on the command and flags, inject keystrokes after fixed
//!    delays (branch dialog navigation, amend toggle, forced confirm)
//!
//! The delays are a best-effort heuristic, not a synchronization point,
//! and the keystrokes land in whichever window holds focus at send-time.
//! TortoiseGit's dialogs rely on the exact delays and ordering, so this
//! module must not grow retry loops or window-readiness polling.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use thiserror::Error;

use crate::core::invocation::Invocation;
use crate::desktop::{Desktop, Keystroke, WindowId};
use crate::ui::output::{self, Verbosity};

/// The TortoiseGit GUI dispatcher.
pub const TOOL_EXE: &str = "TortoiseGitProc.exe";

/// Substring identifying a TortoiseGit top-level window title.
pub const WINDOW_TITLE_MARKER: &str = "TortoiseGit";

/// Pause between spawning the process and the single window enumeration.
const WINDOW_SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Pause before navigating the create-branch dialog.
const BRANCH_DIALOG_DELAY: Duration = Duration::from_millis(300);

/// Pause before toggling "Amend Last Commit".
const AMEND_KEY_DELAY: Duration = Duration::from_millis(800);

/// Pause before the forced ENTER.
const FORCE_KEY_DELAY: Duration = Duration::from_millis(600);

/// Tab stops between the branch-name field and the dialog's OK button.
const BRANCH_DIALOG_TABS: usize = 4;

/// Errors from process launch.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The external process could not be started.
    #[error("failed to start {exe}")]
    Spawn {
        exe: String,
        #[source]
        source: std::io::Error,
    },
}

/// Starts the external executable. Failure is reported, not retried.
pub trait Launcher {
    /// Spawn `exe` with `args` and return without waiting for it.
    fn launch(&self, exe: &Path, args: &[String]) -> Result<(), LaunchError>;
}

/// Launcher backed by [`std::process::Command`].
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, exe: &Path, args: &[String]) -> Result<(), LaunchError> {
        let mut command = Command::new(exe);

        // TortoiseGitProc parses its own command line; the quotes inside
        // tokens like /path:"a*b" must reach it untouched.
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            for arg in args {
                command.raw_arg(arg);
            }
        }
        #[cfg(not(windows))]
        command.args(args);

        command
            .spawn()
            .map(drop)
            .map_err(|source| LaunchError::Spawn {
                exe: exe.display().to_string(),
                source,
            })
    }
}

/// Locate TortoiseGitProc.exe.
///
/// Order: the explicit config override, the two well-known install
/// locations under the program-files roots, then the bare executable name
/// (deferring to the OS search path).
pub fn locate_tool(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    for var in ["ProgramFiles", "ProgramFiles(x86)"] {
        if let Some(root) = std::env::var_os(var) {
            let candidate = Path::new(&root)
                .join("TortoiseGit")
                .join("bin")
                .join(TOOL_EXE);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(TOOL_EXE)
}

/// Launch the tool and run the post-launch automation protocol.
///
/// A missing target window is a warning, not an error: the process was
/// launched, only the foreground/keystroke assistance is skipped.
///
/// # Errors
///
/// `LaunchError` when the external process cannot be started.
pub fn run(
    invocation: &Invocation,
    cwd: &Path,
    exe: &Path,
    launcher: &dyn Launcher,
    desktop: &dyn Desktop,
) -> Result<(), LaunchError> {
    let verbosity = Verbosity::from_flag(invocation.verbose);
    let args = invocation.to_args(cwd);

    output::debug(
        format!("\"{}\" {}", exe.display(), args.join(" ")),
        verbosity,
    );
    launcher.launch(exe, &args)?;

    desktop.sleep(WINDOW_SEARCH_DELAY);

    let mut target = None;
    for window in desktop.windows() {
        match desktop.window_title(window) {
            Ok(title) if title.contains(WINDOW_TITLE_MARKER) => {
                output::debug(format!("force foreground: {:?}", window), verbosity);
                force_foreground(desktop, window);
                target = Some(window);
            }
            Ok(_) => {}
            // A window may close mid-enumeration; skip it and keep going.
            Err(err) => output::debug(format!("skipping window: {}", err), verbosity),
        }
    }

    if target.is_none() {
        output::warn("A window handle was not found");
        return Ok(());
    }

    if invocation.command == "branch" {
        desktop.sleep(BRANCH_DIALOG_DELAY);
        desktop.send(Keystroke::Menu('S'));
        for _ in 0..BRANCH_DIALOG_TABS {
            desktop.send(Keystroke::Tab);
        }
    }

    if invocation.amend {
        desktop.sleep(AMEND_KEY_DELAY);
        desktop.send(Keystroke::Menu('L'));
    }

    if invocation.force {
        desktop.sleep(FORCE_KEY_DELAY);
        if invocation.command == "commit" {
            desktop.send(Keystroke::Tab);
        }
        desktop.send(Keystroke::Enter);
    }

    Ok(())
}

/// Bring `window` to the foreground despite focus-stealing restrictions.
///
/// The OS refuses unprivileged foreground changes unless the calling
/// thread's input queue is attached to the thread that currently holds
/// focus, hence the attach/detach dance when the threads differ.
fn force_foreground(desktop: &dyn Desktop, window: WindowId) {
    let fore_thread = desktop
        .foreground_window()
        .map(|w| desktop.window_thread(w))
        .unwrap_or(0);
    let target_thread = desktop.window_thread(window);

    if fore_thread != target_thread {
        desktop.attach_thread_input(fore_thread, target_thread, true);
        desktop.bring_to_top(window);
        desktop.show(window);
        desktop.attach_thread_input(fore_thread, target_thread, false);
    } else {
        desktop.bring_to_top(window);
        desktop.show(window);
    }
}

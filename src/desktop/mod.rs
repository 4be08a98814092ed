//! desktop
//!
//! OS window enumeration and synthetic input.
//!
//! # Design
//!
//! The [`Desktop`] trait is the seam between the launch orchestrator and
//! the window system. The native implementation ([`win32`]) exists only on
//! Windows; other platforms get a headless stub that enumerates nothing,
//! so automation degrades to the documented "window not found" warning
//! while the rest of the tool keeps working. [`mock::MockDesktop`] records
//! every call for deterministic tests.
//!
//! Windows belong to the OS and the spawned process; tgo only observes
//! them and requests foreground focus. Handles are queried fresh each run
//! and never cached.

pub mod mock;
#[cfg(windows)]
pub mod win32;

use std::time::Duration;

use thiserror::Error;

/// Opaque handle to a top-level OS window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub isize);

/// A synthetic keystroke, delivered to whichever window holds OS input
/// focus at send-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// ALT plus a letter (a dialog accelerator, e.g. ALT+L).
    Menu(char),
    /// TAB, to move focus between dialog controls.
    Tab,
    /// ENTER, to accept the focused control.
    Enter,
}

/// Errors from per-window queries.
///
/// These are expected during enumeration (a window can close at any time)
/// and callers skip the affected window rather than aborting.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DesktopError {
    /// The window disappeared between enumeration and the query.
    #[error("window {0:?} is no longer valid")]
    WindowGone(WindowId),
}

/// Window-system operations the launch orchestrator needs.
pub trait Desktop {
    /// All top-level window handles, in Z-order.
    fn windows(&self) -> Vec<WindowId>;

    /// The window's title text.
    ///
    /// # Errors
    ///
    /// `DesktopError::WindowGone` when the handle is stale.
    fn window_title(&self, window: WindowId) -> Result<String, DesktopError>;

    /// The window currently holding the foreground, if any.
    fn foreground_window(&self) -> Option<WindowId>;

    /// Id of the thread that owns the window (0 for a stale handle).
    fn window_thread(&self, window: WindowId) -> u32;

    /// Attach or detach the input queues of two threads.
    fn attach_thread_input(&self, from_thread: u32, to_thread: u32, attach: bool);

    /// Move the window to the top of the Z-order.
    fn bring_to_top(&self, window: WindowId);

    /// Ask the window system to show the window.
    fn show(&self, window: WindowId);

    /// Inject a synthetic keystroke into the focused window.
    fn send(&self, key: Keystroke);

    /// Suspend the calling thread.
    fn sleep(&self, duration: Duration);
}

/// The native desktop for this platform.
#[cfg(windows)]
pub fn native() -> impl Desktop {
    win32::Win32Desktop::new()
}

/// The native desktop for this platform.
///
/// Non-Windows builds have no automation backend: the window list is
/// empty, which routes every run down the "window not found" warning path.
#[cfg(not(windows))]
pub fn native() -> impl Desktop {
    Headless
}

/// Stub desktop for platforms without Win32.
#[cfg(not(windows))]
struct Headless;

#[cfg(not(windows))]
impl Desktop for Headless {
    fn windows(&self) -> Vec<WindowId> {
        Vec::new()
    }

    fn window_title(&self, window: WindowId) -> Result<String, DesktopError> {
        Err(DesktopError::WindowGone(window))
    }

    fn foreground_window(&self) -> Option<WindowId> {
        None
    }

    fn window_thread(&self, _window: WindowId) -> u32 {
        0
    }

    fn attach_thread_input(&self, _from_thread: u32, _to_thread: u32, _attach: bool) {}

    fn bring_to_top(&self, _window: WindowId) {}

    fn show(&self, _window: WindowId) {}

    fn send(&self, _key: Keystroke) {}

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

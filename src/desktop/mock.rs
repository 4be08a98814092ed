//! desktop::mock
//!
//! Recording mock desktop for deterministic tests.
//!
//! # Design
//!
//! The mock holds a configurable window list and records every mutating
//! call (input attachment, Z-order changes, keystrokes, sleeps) so tests
//! can assert the exact automation sequence without touching a real window
//! system or waiting out real delays.
//!
//! # Example
//!
//! ```
//! use tgo::desktop::mock::MockDesktop;
//! use tgo::desktop::{Desktop, Keystroke, WindowId};
//!
//! let desktop = MockDesktop::new();
//! desktop.add_window(WindowId(1), "TortoiseGit Sync", 7);
//!
//! desktop.send(Keystroke::Enter);
//! assert_eq!(desktop.sent_keys(), vec![Keystroke::Enter]);
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{Desktop, DesktopError, Keystroke, WindowId};

/// Recorded call for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    AttachInput {
        from_thread: u32,
        to_thread: u32,
        attach: bool,
    },
    BringToTop(WindowId),
    Show(WindowId),
    Send(Keystroke),
    Sleep(Duration),
}

#[derive(Debug, Clone)]
struct MockWindow {
    id: WindowId,
    /// `None` makes every title read fail, simulating a window that
    /// closed mid-enumeration.
    title: Option<String>,
    thread: u32,
}

#[derive(Debug, Default)]
struct Inner {
    windows: Vec<MockWindow>,
    foreground: Option<WindowId>,
    events: Vec<MockEvent>,
}

/// Mock desktop for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockDesktop {
    inner: Arc<Mutex<Inner>>,
}

impl MockDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a window with a readable title.
    pub fn add_window(&self, id: WindowId, title: &str, thread: u32) {
        self.inner.lock().unwrap().windows.push(MockWindow {
            id,
            title: Some(title.to_string()),
            thread,
        });
    }

    /// Add a window whose title read always fails.
    pub fn add_broken_window(&self, id: WindowId, thread: u32) {
        self.inner.lock().unwrap().windows.push(MockWindow {
            id,
            title: None,
            thread,
        });
    }

    /// Set which window currently holds the foreground.
    pub fn set_foreground(&self, id: WindowId) {
        self.inner.lock().unwrap().foreground = Some(id);
    }

    /// Every recorded call, in order.
    pub fn events(&self) -> Vec<MockEvent> {
        self.inner.lock().unwrap().events.clone()
    }

    /// Just the keystrokes, in send order.
    pub fn sent_keys(&self) -> Vec<Keystroke> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                MockEvent::Send(key) => Some(key),
                _ => None,
            })
            .collect()
    }

    /// Just the sleeps, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                MockEvent::Sleep(duration) => Some(duration),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: MockEvent) {
        self.inner.lock().unwrap().events.push(event);
    }
}

impl Desktop for MockDesktop {
    fn windows(&self) -> Vec<WindowId> {
        self.inner
            .lock()
            .unwrap()
            .windows
            .iter()
            .map(|w| w.id)
            .collect()
    }

    fn window_title(&self, window: WindowId) -> Result<String, DesktopError> {
        let inner = self.inner.lock().unwrap();
        match inner.windows.iter().find(|w| w.id == window) {
            Some(found) => found
                .title
                .clone()
                .ok_or(DesktopError::WindowGone(window)),
            None => Err(DesktopError::WindowGone(window)),
        }
    }

    fn foreground_window(&self) -> Option<WindowId> {
        self.inner.lock().unwrap().foreground
    }

    fn window_thread(&self, window: WindowId) -> u32 {
        self.inner
            .lock()
            .unwrap()
            .windows
            .iter()
            .find(|w| w.id == window)
            .map(|w| w.thread)
            .unwrap_or(0)
    }

    fn attach_thread_input(&self, from_thread: u32, to_thread: u32, attach: bool) {
        self.record(MockEvent::AttachInput {
            from_thread,
            to_thread,
            attach,
        });
    }

    fn bring_to_top(&self, window: WindowId) {
        self.record(MockEvent::BringToTop(window));
    }

    fn show(&self, window: WindowId) {
        self.record(MockEvent::Show(window));
    }

    fn send(&self, key: Keystroke) {
        self.record(MockEvent::Send(key));
    }

    fn sleep(&self, duration: Duration) {
        // Tests assert on scheduled delays; nothing actually waits.
        self.record(MockEvent::Sleep(duration));
    }
}

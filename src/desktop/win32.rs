//! desktop::win32
//!
//! Native [`Desktop`] implementation over the Win32 user32 API.
//!
//! The enumeration callback pushes handles into a plain `Vec`, so callers
//! see a complete list and iterate it synchronously; enumeration is
//! exhaustive before any handle is used.

use std::time::Duration;

use windows_sys::Win32::Foundation::{HWND, LPARAM};
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    AttachThreadInput, SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYEVENTF_KEYUP,
    VIRTUAL_KEY, VK_MENU, VK_RETURN, VK_TAB,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    BringWindowToTop, EnumWindows, GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsWindow, ShowWindow, SW_SHOW,
};

use super::{Desktop, DesktopError, Keystroke, WindowId};

/// Win32-backed desktop.
pub struct Win32Desktop;

impl Win32Desktop {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32Desktop {
    fn default() -> Self {
        Self::new()
    }
}

unsafe extern "system" fn collect_window(handle: HWND, lparam: LPARAM) -> i32 {
    let out = &mut *(lparam as *mut Vec<WindowId>);
    out.push(WindowId(handle));
    1
}

fn key_event(vk: VIRTUAL_KEY, up: bool) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: 0,
                dwFlags: if up { KEYEVENTF_KEYUP } else { 0 },
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn key_inputs(key: Keystroke) -> Vec<INPUT> {
    match key {
        Keystroke::Menu(c) => {
            let vk = c.to_ascii_uppercase() as VIRTUAL_KEY;
            vec![
                key_event(VK_MENU, false),
                key_event(vk, false),
                key_event(vk, true),
                key_event(VK_MENU, true),
            ]
        }
        Keystroke::Tab => vec![key_event(VK_TAB, false), key_event(VK_TAB, true)],
        Keystroke::Enter => vec![key_event(VK_RETURN, false), key_event(VK_RETURN, true)],
    }
}

impl Desktop for Win32Desktop {
    fn windows(&self) -> Vec<WindowId> {
        let mut out: Vec<WindowId> = Vec::new();
        unsafe {
            EnumWindows(Some(collect_window), &mut out as *mut Vec<WindowId> as LPARAM);
        }
        out
    }

    fn window_title(&self, window: WindowId) -> Result<String, DesktopError> {
        unsafe {
            if IsWindow(window.0) == 0 {
                return Err(DesktopError::WindowGone(window));
            }
            let length = GetWindowTextLengthW(window.0);
            if length <= 0 {
                return Ok(String::new());
            }
            let mut buffer = vec![0u16; length as usize + 1];
            let copied = GetWindowTextW(window.0, buffer.as_mut_ptr(), buffer.len() as i32);
            Ok(String::from_utf16_lossy(&buffer[..copied.max(0) as usize]))
        }
    }

    fn foreground_window(&self) -> Option<WindowId> {
        let handle = unsafe { GetForegroundWindow() };
        (handle != 0).then_some(WindowId(handle))
    }

    fn window_thread(&self, window: WindowId) -> u32 {
        unsafe { GetWindowThreadProcessId(window.0, std::ptr::null_mut()) }
    }

    fn attach_thread_input(&self, from_thread: u32, to_thread: u32, attach: bool) {
        unsafe {
            AttachThreadInput(from_thread, to_thread, attach as i32);
        }
    }

    fn bring_to_top(&self, window: WindowId) {
        unsafe {
            BringWindowToTop(window.0);
        }
    }

    fn show(&self, window: WindowId) {
        unsafe {
            ShowWindow(window.0, SW_SHOW);
        }
    }

    fn send(&self, key: Keystroke) {
        let inputs = key_inputs(key);
        unsafe {
            SendInput(
                inputs.len() as u32,
                inputs.as_ptr(),
                std::mem::size_of::<INPUT>() as i32,
            );
        }
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Debug chatter is opt-in via `--verbose` and goes to stderr so it never
//! mixes with resolver diagnostics on stdout. Warnings are always shown:
//! a run that launched the tool but could not automate it must say so.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Normal mode - warnings only
    Normal,
    /// Verbose mode - debug output
    Verbose,
}

impl Verbosity {
    /// Create verbosity from the `--verbose` flag.
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in verbose mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Verbose {
        eprintln!("[debug] {}", message);
    }
}

/// Print a warning message (always shown).
pub fn warn(message: impl Display) {
    eprintln!("WARNING: {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flag() {
        assert_eq!(Verbosity::from_flag(false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flag(true), Verbosity::Verbose);
    }
}

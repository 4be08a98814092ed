//! core::invocation
//!
//! Assembly of the TortoiseGitProc argument list.
//!
//! # Token order
//!
//! Passthrough tokens come first (in the order they were parsed), then
//! `/exactpath` when the user supplied explicit paths, then exactly one
//! `/command:` token, exactly one `/path:` token, and finally the prompt
//! suppression tokens unless verbose mode keeps the dialogs talkative.
//! TortoiseGitProc is tolerant of token order beyond that.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use tgo::core::invocation::Invocation;
//!
//! let invocation = Invocation {
//!     command: "sync".to_string(),
//!     paths: Vec::new(),
//!     passthrough: Vec::new(),
//!     verbose: false,
//!     amend: false,
//!     force: false,
//! };
//!
//! let args = invocation.to_args(Path::new("/work"));
//! assert_eq!(args[0], "/command:sync");
//! assert_eq!(args[1], "/path:\"/work\"");
//! assert_eq!(args[2], "/noquestion");
//! assert_eq!(args[3], "/closeonend:2");
//! ```

use std::path::{Path, PathBuf};

/// Separator TortoiseGitProc expects between multiple `/path:` entries.
const PATH_SEPARATOR: char = '*';

/// One fully-resolved run: the command, its targets, and the flags that
/// steer the post-launch automation.
///
/// Built once per CLI invocation and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Canonical operation name from the resolver.
    pub command: String,
    /// Target paths as typed (absolutized); empty means "current directory".
    pub paths: Vec<PathBuf>,
    /// Opaque tokens forwarded to TortoiseGitProc verbatim.
    pub passthrough: Vec<String>,
    /// Keep prompts visible and print debug info.
    pub verbose: bool,
    /// Tick "Amend Last Commit" in the commit dialog.
    pub amend: bool,
    /// Press ENTER in the opened dialog.
    pub force: bool,
}

impl Invocation {
    /// Flatten into the ordered token list handed to the launcher.
    ///
    /// `cwd` is substituted as the single path entry when the user typed
    /// none, so the path set is never empty here.
    pub fn to_args(&self, cwd: &Path) -> Vec<String> {
        let mut args = self.passthrough.clone();

        let paths: Vec<String> = if self.paths.is_empty() {
            vec![cwd.display().to_string()]
        } else {
            args.push("/exactpath".to_string());
            self.paths.iter().map(|p| p.display().to_string()).collect()
        };

        args.push(format!("/command:{}", self.command));
        args.push(format!(
            "/path:\"{}\"",
            paths.join(&PATH_SEPARATOR.to_string())
        ));

        if !self.verbose {
            args.push("/noquestion".to_string());
            args.push("/closeonend:2".to_string());
        }

        args
    }

    /// The flattened line, for verbose echo.
    pub fn display_line(&self, cwd: &Path) -> String {
        self.to_args(cwd).join(" ")
    }
}

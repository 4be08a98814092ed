//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Surface
//!
//! `tgo [COMMAND] [options] [path...]`
//!
//! The command token is fuzzy: any unambiguous prefix of a catalog name
//! works, `.` is shorthand for `sync`. Positional tokens after the command
//! are paths while they exist on disk; the first `/`-style token (or
//! anything after `--`) ends path-scanning and passes through to
//! TortoiseGitProc verbatim.

use clap::{ArgAction, Parser};

use crate::core::catalog::Catalog;

/// Launch TortoiseGit dialogs straight from the command line
#[derive(Parser, Debug)]
#[command(name = "tgo")]
#[command(version, disable_help_flag = true)]
#[command(about, long_about = None)]
#[command(after_help = help_footer())]
pub struct Cli {
    /// Run the command in the git repository root
    #[arg(short, long)]
    pub global: bool,

    /// Print debug info, accept unresolved commands, keep dialogs and prompts visible
    #[arg(short, long)]
    pub verbose: bool,

    /// Tick 'Amend Last Commit' in the commit dialog (ALT+L)
    #[arg(short, long, alias = "amen")]
    pub amend: bool,

    /// Press ENTER in the opened dialog
    #[arg(short, long)]
    pub force: bool,

    /// Log message for the commit dialog
    #[arg(short, long = "msg", value_name = "STRING")]
    pub msg: Option<String>,

    /// URL for the clone dialog
    #[arg(short, long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Print help
    #[arg(short, long, short_alias = '?', action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Command token, then paths and raw TortoiseGitProc arguments
    #[arg(value_name = "COMMAND|PATH|ARG")]
    pub extra: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Whether any flag asks for a launch even without a command token.
    ///
    /// `tgo -g` alone means "sync the repository root": flags imply the
    /// default `.` command, while a completely bare `tgo` prints help.
    pub fn wants_launch(&self) -> bool {
        self.global
            || self.verbose
            || self.amend
            || self.force
            || self.msg.is_some()
            || self.url.is_some()
    }
}

/// Examples, the command catalog, and the passthrough note, rendered under
/// the generated option help.
fn help_footer() -> String {
    use std::fmt::Write;

    let mut footer = String::from("Common examples:\n");
    for (example, what) in [
        ("tgo .", "Opens the sync dialog"),
        ("tgo a", "Opens the add files dialog"),
        ("tgo c -g", "Opens the commit dialog, showing all files in the repository"),
        ("tgo l", "Opens the log dialog"),
        ("tgo m", "Opens the merge dialog"),
        ("tgo pul", "Opens the pull dialog"),
        ("tgo pus", "Opens the push dialog"),
        ("tgo reb", "Opens the rebase dialog"),
    ] {
        let _ = writeln!(footer, "  {:<10} {}", example, what);
    }

    footer.push_str("\nTortoiseGit commands:\n");
    for op in Catalog::builtin().iter() {
        let _ = writeln!(footer, "  {:<16} {}", op.name, op.description);
    }

    footer.push_str(
        "\nAdditional arguments can be passed through verbatim using '/arg1 /arg2'.\n\
         See https://tortoisegit.org/docs/tortoisegit/tgit-automation.html for the full list.",
    );
    footer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tgo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_parse_anywhere_around_positionals() {
        let cli = parse(&["c", "-g", "-v"]);
        assert!(cli.global);
        assert!(cli.verbose);
        assert_eq!(cli.extra, vec!["c"]);
    }

    #[test]
    fn amen_spelling_is_accepted() {
        assert!(parse(&["c", "--amen"]).amend);
        assert!(parse(&["c", "--amend"]).amend);
        assert!(parse(&["c", "-a"]).amend);
    }

    #[test]
    fn msg_accepts_equals_and_space_forms() {
        assert_eq!(parse(&["c", "-m=fix"]).msg.as_deref(), Some("fix"));
        assert_eq!(parse(&["c", "-m", "fix"]).msg.as_deref(), Some("fix"));
        assert_eq!(parse(&["c", "--msg=fix it"]).msg.as_deref(), Some("fix it"));
    }

    #[test]
    fn slash_tokens_are_positionals() {
        let cli = parse(&["log", "/startrev:HEAD~5"]);
        assert_eq!(cli.extra, vec!["log", "/startrev:HEAD~5"]);
    }

    #[test]
    fn double_dash_passes_dash_tokens_through() {
        let cli = parse(&["log", "--", "-custom"]);
        assert_eq!(cli.extra, vec!["log", "-custom"]);
    }

    #[test]
    fn bare_invocation_parses_empty() {
        let cli = parse(&[]);
        assert!(cli.extra.is_empty());
        assert!(!cli.wants_launch());
    }

    #[test]
    fn any_flag_implies_a_launch() {
        assert!(parse(&["-g"]).wants_launch());
        assert!(parse(&["-m", "x"]).wants_launch());
        assert!(!parse(&["sync"]).wants_launch());
    }

    #[test]
    fn footer_lists_the_whole_catalog() {
        let footer = help_footer();
        for op in Catalog::builtin().iter() {
            assert!(footer.contains(op.name));
        }
    }
}

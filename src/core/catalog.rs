//! core::catalog
//!
//! The fixed table of TortoiseGitProc operations.
//!
//! # Design
//!
//! The catalog is pure data: every operation TortoiseGitProc accepts via
//! `/command:<name>`, paired with the description shown in `tgo --help`.
//! It is constructed once at startup and passed to the resolver and the
//! help renderer explicitly; there is no hidden global.
//!
//! # Invariants
//!
//! - Operation names are pairwise distinct
//! - Names are lowercase tokens without whitespace, never empty

/// One named action TortoiseGitProc supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Canonical name, as passed in `/command:<name>`.
    pub name: &'static str,
    /// Human description for help output.
    pub description: &'static str,
}

/// Every TortoiseGitProc operation, in help-output order.
const BUILTIN: &[Operation] = &[
    op("about", "Shows the about dialog"),
    op("bisect", "Allows to control the bisect logic of TortoiseGit"),
    op("branch", "Opens the create branch dialog"),
    op("fetch", "Opens the fetch dialog"),
    op("log", "Opens the log dialog"),
    op("clone", "Opens the clone dialog"),
    op("commit", "Opens the commit dialog"),
    op("add", "Adds the files in /path to version control"),
    op("revert", "Reverts local modifications of a working tree"),
    op("cleanup", "Cleans up the working tree in /path"),
    op("resolve", "Marks a conflicted file specified in /path as resolved"),
    op("repocreate", "Creates a repository in /path"),
    op("switch", "Opens the switch dialog"),
    op("export", "Exports a revision of the repository in /path to a zip file"),
    op("merge", "Opens the merge dialog"),
    op("settings", "Opens the settings dialog"),
    op("remove", "Removes the file(s) in /path from version control"),
    op("rename", "Renames the file in /path"),
    op(
        "diff",
        "Starts the external diff program specified in the TortoiseGit settings",
    ),
    op("showcompare", "Compares two revisions or paths"),
    op(
        "conflicteditor",
        "Starts the conflict editor specified in the TortoiseGit settings",
    ),
    op("help", "Opens the help file"),
    op("repostatus", "Opens the check-for-modifications dialog"),
    op(
        "repobrowser",
        "Starts the repository browser dialog, pointing to the working tree given in /path",
    ),
    op("ignore", "Adds all targets in /path to the ignore list"),
    op("blame", "Opens TortoiseGitBlame for the file specified in /path"),
    op(
        "cat",
        "Saves a file from an URL or working tree path given in /path to the location given in /savepath:path",
    ),
    op("pull", "Opens the pull dialog in the working tree located in /path"),
    op("push", "Opens the push dialog in the working tree located in /path"),
    op("rebase", "Opens the rebase dialog for the working tree located in /path"),
    op("stashsave", "Opens the stash save dialog for the working tree located in /path"),
    op("stashapply", "Applies the latest stash to the working tree located in /path"),
    op(
        "stashpop",
        "Applies the latest stash to the working tree located in /path and drops the latest stash entry",
    ),
    op("subadd", "Opens the submodule add dialog"),
    op(
        "subupdate",
        "Opens the submodule update dialog and filters the submodules regarding the folder /path",
    ),
    op("subsync", "Syncs the submodule information for the working tree located in /path"),
    op("sync", "Opens the sync dialog for the working tree located in /path"),
    op("reflog", "Opens the reflog dialog for the repository located in /path"),
    op("refbrowse", "Opens the browse references dialog for the repository located in /path"),
    op(
        "updatecheck",
        "Checks whether a newer TortoiseGit version is available (/visible forces the dialog)",
    ),
    op("revisiongraph", "Shows the revision graph for the repository given in /path"),
    op("daemon", "Launches the Git Daemon for the repository given in /path"),
    op("pgpfp", "Prints the TortoiseGit Release Signing Key fingerprint"),
    op("tag", "Opens the Create Tag dialog"),
];

const fn op(name: &'static str, description: &'static str) -> Operation {
    Operation { name, description }
}

/// The fixed, ordered set of operations known to the resolver.
///
/// # Example
///
/// ```
/// use tgo::core::catalog::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert!(catalog.contains("commit"));
/// assert!(!catalog.contains("Commit"));
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    operations: Vec<Operation>,
}

impl Catalog {
    /// The full TortoiseGitProc catalog.
    pub fn builtin() -> Self {
        Self::new(BUILTIN.to_vec())
    }

    /// Build a catalog from an explicit operation list.
    ///
    /// Names must be pairwise distinct and non-empty.
    pub fn new(operations: Vec<Operation>) -> Self {
        debug_assert!(operations.iter().all(|op| !op.name.is_empty()));
        debug_assert!({
            let mut names: Vec<_> = operations.iter().map(|op| op.name).collect();
            names.sort_unstable();
            names.windows(2).all(|pair| pair[0] != pair[1])
        });
        Self { operations }
    }

    /// Iterate the operations in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    /// Whether `name` is a canonical operation name (case-sensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.operations.iter().any(|op| op.name == name)
    }

    /// All operation names starting with `token`, in catalog order.
    pub fn prefix_matches(&self, token: &str) -> Vec<&'static str> {
        self.operations
            .iter()
            .filter(|op| op.name.starts_with(token))
            .map(|op| op.name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_distinct_and_well_formed() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.iter().map(|op| op.name).collect();

        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len(), "duplicate operation name");

        for name in names {
            assert!(!name.is_empty());
            assert_eq!(name, name.to_lowercase());
            assert!(!name.contains(char::is_whitespace));
        }
    }

    #[test]
    fn descriptions_are_present() {
        for op in Catalog::builtin().iter() {
            assert!(!op.description.is_empty(), "{} lacks a description", op.name);
        }
    }

    #[test]
    fn contains_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.contains("sync"));
        assert!(!catalog.contains("syn"));
        assert!(!catalog.contains("SYNC"));
    }

    #[test]
    fn prefix_matches_in_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.prefix_matches("pu"), vec!["pull", "push"]);
        assert_eq!(catalog.prefix_matches("merge"), vec!["merge"]);
        assert!(catalog.prefix_matches("zzz").is_empty());
    }
}

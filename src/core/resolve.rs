//! core::resolve
//!
//! Fuzzy command resolution.
//!
//! # Rules
//!
//! A user token maps to a canonical operation name via, in order:
//!
//! 1. Exact match (always wins, even when the token also prefixes other names)
//! 2. Unambiguous prefix match (case-sensitive, prefix-anchored)
//! 3. The fixed shorthand `.` for `sync`
//! 4. A hand-authored priority list for common ambiguous prefixes:
//!    `add`, `branch`, `commit`, `diff`, checked in that literal order
//!
//! When all rules fail, the ambiguous candidate list (if any) is printed as
//! a diagnostic; strict mode then fails, lenient mode hands the token back
//! unresolved so the caller can pass it through to TortoiseGitProc as typed.
//!
//! # Example
//!
//! ```
//! use tgo::core::catalog::Catalog;
//! use tgo::core::resolve::resolve;
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(resolve(&catalog, "pul", true).unwrap(), "pull");
//! assert_eq!(resolve(&catalog, ".", true).unwrap(), "sync");
//! assert_eq!(resolve(&catalog, "c", true).unwrap(), "commit");
//! ```

use thiserror::Error;

use super::catalog::Catalog;

/// Winners for ambiguous prefixes, checked in this exact order.
///
/// An explicit lookup list, not a scoring heuristic: several operation
/// names share short, commonly-typed prefixes and a deterministic,
/// human-guessable winner has to be picked instead of erroring.
const TIE_BREAK_PRIORITY: &[&str] = &["add", "branch", "commit", "diff"];

/// Name the `.` shorthand expands to, independent of the catalog.
const DOT_COMMAND: &str = "sync";

/// A token that resolves to no operation, or to several.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Mistyped command? -- {token}")]
pub struct ResolveError {
    /// The token as the user typed it.
    pub token: String,
    /// Prefix candidates the token matched, in catalog order.
    pub candidates: Vec<&'static str>,
}

/// Resolve `token` against `catalog`.
///
/// With `strict` false (the lenient verbose-mode probe), an unresolvable
/// token is returned as typed instead of failing.
///
/// Resolution is a pure function of the catalog and the token; the only
/// side effect is the diagnostic candidate list printed to stdout when no
/// rule picks a winner.
///
/// # Errors
///
/// `ResolveError` when `strict` is true and no rule produced a name.
pub fn resolve(catalog: &Catalog, token: &str, strict: bool) -> Result<String, ResolveError> {
    if catalog.contains(token) {
        return Ok(token.to_string());
    }

    let candidates = if !token.is_empty() && !token.starts_with('-') {
        catalog.prefix_matches(token)
    } else {
        Vec::new()
    };

    if candidates.len() == 1 {
        return Ok(candidates[0].to_string());
    }

    if token == "." {
        return Ok(DOT_COMMAND.to_string());
    }

    for name in TIE_BREAK_PRIORITY {
        if candidates.contains(name) {
            return Ok((*name).to_string());
        }
    }

    if !candidates.is_empty() {
        println!("{}", candidates.join(", "));
    }

    if strict {
        Err(ResolveError {
            token: token.to_string(),
            candidates,
        })
    } else {
        Ok(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Operation;

    fn catalog_of(names: &[&'static str]) -> Catalog {
        Catalog::new(
            names
                .iter()
                .map(|name| Operation {
                    name,
                    description: "",
                })
                .collect(),
        )
    }

    #[test]
    fn exact_match_wins_over_prefix_ambiguity() {
        let catalog = catalog_of(&["commit", "commitlog"]);
        assert_eq!(resolve(&catalog, "commit", true).unwrap(), "commit");
        assert_eq!(resolve(&catalog, "commitl", true).unwrap(), "commitlog");
    }

    #[test]
    fn unique_prefix_resolves() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve(&catalog, "pul", true).unwrap(), "pull");
        assert_eq!(resolve(&catalog, "pus", true).unwrap(), "push");
        assert_eq!(resolve(&catalog, "reb", true).unwrap(), "rebase");
        assert_eq!(resolve(&catalog, "m", true).unwrap(), "merge");
    }

    #[test]
    fn dot_is_sync_even_without_a_prefix_match() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve(&catalog, ".", true).unwrap(), "sync");
    }

    #[test]
    fn dot_expands_independent_of_catalog_contents() {
        let catalog = catalog_of(&["about"]);
        assert_eq!(resolve(&catalog, ".", true).unwrap(), "sync");
    }

    #[test]
    fn priority_list_breaks_ties() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve(&catalog, "a", true).unwrap(), "add");
        assert_eq!(resolve(&catalog, "b", true).unwrap(), "branch");
        assert_eq!(resolve(&catalog, "c", true).unwrap(), "commit");
        assert_eq!(resolve(&catalog, "d", true).unwrap(), "diff");
    }

    #[test]
    fn priority_applies_to_artificial_ties_too() {
        let catalog = catalog_of(&["diffuse", "difftool", "diff"]);
        assert_eq!(resolve(&catalog, "dif", true).unwrap(), "diff");
    }

    #[test]
    fn ambiguous_prefix_fails_in_strict_mode() {
        let catalog = Catalog::builtin();
        let err = resolve(&catalog, "re", true).unwrap_err();
        assert_eq!(err.token, "re");
        assert!(err.candidates.contains(&"rebase"));
        assert!(err.candidates.contains(&"revert"));
        assert_eq!(err.to_string(), "Mistyped command? -- re");
    }

    #[test]
    fn unknown_token_fails_in_strict_mode() {
        let catalog = Catalog::builtin();
        let err = resolve(&catalog, "zzz", true).unwrap_err();
        assert!(err.candidates.is_empty());
    }

    #[test]
    fn lenient_mode_returns_the_token_unresolved() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve(&catalog, "zzz", false).unwrap(), "zzz");
        assert_eq!(resolve(&catalog, "re", false).unwrap(), "re");
    }

    #[test]
    fn dash_tokens_never_prefix_match() {
        let catalog = Catalog::builtin();
        assert!(resolve(&catalog, "-a", true).is_err());
    }

    #[test]
    fn empty_token_fails_in_strict_mode() {
        let catalog = Catalog::builtin();
        assert!(resolve(&catalog, "", true).is_err());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let catalog = Catalog::builtin();
        assert!(resolve(&catalog, "Commit", true).is_err());
    }
}

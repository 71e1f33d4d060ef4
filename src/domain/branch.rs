use once_cell::sync::Lazy;
use regex::Regex;

/// `<key>/<issue>` at the start of a branch name. ASCII classes only, so
/// `feature/١٢` does not count as an issue branch.
static BRANCH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9A-Za-z_]+)/([0-9]+)").expect("branch pattern is valid"));

/// A branch name that carries an issue reference, e.g. `bug/42-crash`.
///
/// `key` selects the rule (`bug`), `issue` is the issue number as written
/// in the branch (`42`, leading zeros preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
    pub key: String,
    pub issue: String,
}

impl BranchRef {
    /// Parse a branch name. Returns `None` for branches that do not start
    /// with `<word>/<digits>`.
    ///
    /// Anything after the digits is ignored, including further `/` segments:
    /// `feature/123/sub` → key `feature`, issue `123`.
    pub fn parse(branch: &str) -> Option<Self> {
        let caps = BRANCH_PATTERN.captures(branch)?;
        Some(BranchRef {
            key: caps[1].to_string(),
            issue: caps[2].to_string(),
        })
    }
}

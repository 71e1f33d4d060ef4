use std::fmt;

/// The issue reference inserted into a commit message: `#42` or `org/repo#42`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuePrefix {
    pub repo: Option<String>,
    pub issue: String,
}

impl IssuePrefix {
    pub fn new(repo: Option<&str>, issue: &str) -> Self {
        IssuePrefix {
            repo: repo.map(String::from),
            issue: issue.to_string(),
        }
    }

    /// Repository part, empty when the rule maps to a bare issue number.
    pub fn repo_str(&self) -> &str {
        self.repo.as_deref().unwrap_or("")
    }
}

impl fmt::Display for IssuePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repo_str(), self.issue)
    }
}

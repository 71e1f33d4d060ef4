use crate::config::Config;
use crate::domain::{BranchRef, IssuePrefix};
use crate::error::Error;
use crate::message::is_already_tagged;
use crate::protect::is_protected_branch;
use crate::template::{self, TemplateData};

/// Result of evaluating a commit message against the current branch.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The message gets an issue prefix.
    Rewritten(Vec<u8>),
    /// The message is left as it is.
    Unchanged(Skip),
}

/// Why a message was left unchanged.
#[derive(Debug, PartialEq, Eq)]
pub enum Skip {
    /// The message already starts with `[...#N]`.
    AlreadyTagged,
    /// The branch name has no `<key>/<number>` shape.
    NoIssueBranch,
    /// The branch key has no rule.
    NoRule(String),
}

impl Outcome {
    /// The final message: the rewritten one, or `original` when unchanged.
    pub fn message<'a>(&'a self, original: &'a [u8]) -> &'a [u8] {
        match self {
            Outcome::Rewritten(message) => message.as_slice(),
            Outcome::Unchanged(_) => original,
        }
    }
}

/// Derive the issue prefix for a branch, or `None` when the branch is not
/// an issue branch or its key has no rule.
///
/// # Examples
///
/// ```
/// use commithelper::config::Config;
/// use commithelper::rewrite::generate_prefix;
///
/// let config = Config::parse(r#"{"rules": {"bug": "org/repo"}}"#).unwrap();
/// let prefix = generate_prefix("bug/42-crash", &config).unwrap();
/// assert_eq!(prefix.to_string(), "org/repo#42");
/// assert!(generate_prefix("main", &config).is_none());
/// ```
pub fn generate_prefix(branch: &str, config: &Config) -> Option<IssuePrefix> {
    let branch = BranchRef::parse(branch)?;
    let rule = config.rule(&branch.key)?;
    Some(rule.prefix(&branch.issue))
}

/// Evaluate a commit message on `branch` under `config`.
///
/// The message is raw bytes in whatever encoding git wrote it; only the
/// issue prefix and template text are added around it.
///
/// Order of checks:
/// 1. already tagged → unchanged
/// 2. protected branch → `Err(Error::Protected)`
/// 3. no `<key>/<number>` branch, or no rule for `key` → unchanged
/// 4. otherwise → message rendered through the configured template
///
/// The tag check is repeated here even though the binary skips tagged
/// messages before looking up the branch, so this function is complete on
/// its own for library callers.
pub fn evaluate(
    message: impl AsRef<[u8]>,
    branch: &str,
    config: &Config,
) -> Result<Outcome, Error> {
    let message = message.as_ref();
    if is_already_tagged(message) {
        return Ok(Outcome::Unchanged(Skip::AlreadyTagged));
    }

    if is_protected_branch(branch, config.protect.as_slice())? {
        return Err(Error::Protected {
            branch: branch.to_string(),
        });
    }

    let Some(branch_ref) = BranchRef::parse(branch) else {
        log::debug!("branch '{branch}' carries no issue number");
        return Ok(Outcome::Unchanged(Skip::NoIssueBranch));
    };
    let Some(rule) = config.rule(&branch_ref.key) else {
        log::debug!("no rule for branch key '{}'", branch_ref.key);
        return Ok(Outcome::Unchanged(Skip::NoRule(branch_ref.key)));
    };

    let data = TemplateData::new(message, &rule.prefix(&branch_ref.issue));
    Ok(Outcome::Rewritten(template::apply(config.template(), &data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> Config {
        Config::parse(json).unwrap()
    }

    fn rewritten(message: &str, branch: &str, cfg: &Config) -> String {
        let outcome = evaluate(message, branch, cfg).unwrap();
        String::from_utf8(outcome.message(message.as_bytes()).to_vec()).unwrap()
    }

    // ---- generate_prefix ----

    #[test]
    fn prefix_for_null_rule_is_bare_issue() {
        let cfg = config(r#"{"rules": {"bug": null}}"#);
        assert_eq!(generate_prefix("bug/42-x", &cfg).unwrap().to_string(), "#42");
    }

    #[test]
    fn prefix_for_repo_rule_includes_repo() {
        let cfg = config(r#"{"rules": {"bug": "org/repo"}}"#);
        assert_eq!(
            generate_prefix("bug/42-x", &cfg).unwrap().to_string(),
            "org/repo#42"
        );
    }

    #[test]
    fn prefix_for_unknown_key_is_none() {
        let cfg = config(r#"{"rules": {"bug": null}}"#);
        assert_eq!(generate_prefix("epic/42", &cfg), None);
    }

    #[test]
    fn prefix_for_non_issue_branch_is_none() {
        let cfg = config(r#"{"rules": {"bug": null}}"#);
        assert_eq!(generate_prefix("bug", &cfg), None);
        assert_eq!(generate_prefix("bug/fix", &cfg), None);
    }

    // ---- evaluate ----

    #[test]
    fn default_format_prefixes_message() {
        let cfg = config(r#"{"rules": {"bug": null}}"#);
        assert_eq!(
            evaluate("fix thing", "bug/42-x", &cfg).unwrap(),
            Outcome::Rewritten(b"[#42] fix thing".to_vec())
        );
    }

    #[test]
    fn repo_rule_prefixes_message() {
        let cfg = config(r#"{"rules": {"feature": "org/repo"}}"#);
        assert_eq!(
            rewritten("add login", "feature/7_login", &cfg),
            "[org/repo#7] add login"
        );
    }

    #[test]
    fn template_is_applied() {
        let cfg = config(
            r#"{"rules": {"bug": "org/repo"}, "template": "{{.Message}}\n\nCloses {{.Prefix}}"}"#,
        );
        assert_eq!(
            rewritten("fix thing", "bug/42", &cfg),
            "fix thing\n\nCloses org/repo#42"
        );
    }

    #[test]
    fn broken_template_falls_back_to_default() {
        let cfg = config(r#"{"rules": {"bug": null}, "template": "{{.Prefix"}"#);
        assert_eq!(rewritten("fix thing", "bug/42", &cfg), "[#42] fix thing");
    }

    #[test]
    fn already_tagged_message_is_unchanged() {
        let cfg = config(r#"{"rules": {"bug": null}}"#);
        assert_eq!(
            evaluate("[#42] fix thing", "bug/42", &cfg).unwrap(),
            Outcome::Unchanged(Skip::AlreadyTagged)
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let cfg = config(r#"{"rules": {"bug": "org/repo"}}"#);
        let once = rewritten("fix thing", "bug/42", &cfg);
        let twice = rewritten(&once, "bug/42", &cfg);
        assert_eq!(once, twice);
    }

    #[test]
    fn tagged_message_skips_protection() {
        let cfg = config(r#"{"protect": ["main"]}"#);
        assert_eq!(
            evaluate("[#1] fix", "main", &cfg).unwrap(),
            Outcome::Unchanged(Skip::AlreadyTagged)
        );
    }

    #[test]
    fn protected_branch_is_rejected() {
        let cfg = config(r#"{"rules": {"release": null}, "protect": ["main", "release/*"]}"#);
        let err = evaluate("fix", "release/1", &cfg).unwrap_err();
        assert!(matches!(err, Error::Protected { ref branch } if branch == "release/1"));
    }

    #[test]
    fn malformed_protect_pattern_is_error() {
        let cfg = config(r#"{"protect": ["release/["]}"#);
        let err = evaluate("fix", "main", &cfg).unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn non_issue_branch_is_unchanged() {
        let cfg = config(r#"{"rules": {"bug": null}}"#);
        assert_eq!(
            evaluate("fix", "develop", &cfg).unwrap(),
            Outcome::Unchanged(Skip::NoIssueBranch)
        );
    }

    #[test]
    fn detached_head_is_unchanged() {
        let cfg = config(r#"{"rules": {"bug": null}}"#);
        assert_eq!(
            evaluate("fix", "", &cfg).unwrap(),
            Outcome::Unchanged(Skip::NoIssueBranch)
        );
    }

    #[test]
    fn branch_without_rule_is_unchanged() {
        let cfg = config(r#"{"rules": {"bug": null}}"#);
        assert_eq!(
            evaluate("fix", "epic/123", &cfg).unwrap(),
            Outcome::Unchanged(Skip::NoRule("epic".to_string()))
        );
    }

    #[test]
    fn empty_config_changes_nothing() {
        let cfg = Config::default();
        assert_eq!(rewritten("fix", "bug/42", &cfg), "fix");
    }

    #[test]
    fn unchanged_outcome_returns_original_message() {
        let outcome = Outcome::Unchanged(Skip::NoIssueBranch);
        assert_eq!(outcome.message(b"original"), b"original");
    }

    #[test]
    fn non_utf8_message_is_prefixed_verbatim() {
        let cfg = config(r#"{"rules": {"bug": null}}"#);
        let message: &[u8] = b"fix caf\xe9\n";
        let outcome = evaluate(message, "bug/42", &cfg).unwrap();
        assert_eq!(outcome.message(message), b"[#42] fix caf\xe9\n");
    }
}

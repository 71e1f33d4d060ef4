use globset::GlobBuilder;

/// A protect pattern that failed to compile.
#[derive(Debug, thiserror::Error)]
#[error("invalid protect pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: globset::Error,
}

/// Tests whether a branch matches a single protect pattern.
///
/// Shell-style glob: `*` and `?` do not match `/`, `[...]` is a character
/// class and `\` escapes the next character. A pattern without
/// metacharacters is an exact match. `{a,b}` is literal text and `**` is
/// the same as `*`.
pub fn matches(branch: &str, pattern: &str) -> Result<bool, PatternError> {
    let glob = GlobBuilder::new(&shell_glob(pattern))
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
    Ok(glob.compile_matcher().is_match(branch))
}

/// Returns true if `branch` matches any of `patterns`.
///
/// Patterns are checked in order and the first match wins. A malformed
/// pattern reached before any match is returned as `Err`.
pub fn is_protected_branch<S: AsRef<str>>(
    branch: &str,
    patterns: &[S],
) -> Result<bool, PatternError> {
    for pattern in patterns {
        if matches(branch, pattern.as_ref())? {
            log::debug!("branch '{branch}' matches protect pattern '{}'", pattern.as_ref());
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rewrite a shell glob into globset syntax: escape `{` and `}` outside
/// character classes and collapse runs of `*`.
fn shell_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' if !in_class => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
                if let Some(neg) = chars.next_if(|&n| n == '!' || n == '^') {
                    out.push(neg);
                }
                // `]` right after the opening bracket is a member, not the end
                if let Some(close) = chars.next_if_eq(&']') {
                    out.push(close);
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '{' | '}' if !in_class => {
                out.push('\\');
                out.push(c);
            }
            '*' if !in_class => {
                out.push(c);
                while chars.next_if_eq(&'*').is_some() {}
            }
            _ => out.push(c),
        }
    }
    out
}

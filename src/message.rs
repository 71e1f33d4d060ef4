use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// `[#123]` or `[org/repo#123]` at the start of a message. Byte-oriented so
/// messages in a non-UTF-8 commit encoding can still be inspected.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)^\[.*?#[0-9]+\]").expect("tag pattern is valid"));

/// Returns true if the message already begins with a bracketed issue
/// reference. Leading and trailing ASCII whitespace is ignored.
pub fn is_already_tagged(message: impl AsRef<[u8]>) -> bool {
    TAG_PATTERN.is_match(message.as_ref().trim_ascii())
}

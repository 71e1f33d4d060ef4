//! Commit message templates.
//!
//! A template is plain text with `{{.Field}}` actions, where `Field` is one of
//! `Message`, `Number`, `Repo` or `Prefix`. Actions may carry trim markers
//! (`{{- .Prefix -}}` drops surrounding whitespace) and `{{/* comments */}}`
//! render nothing. There is no control flow.
//!
//! The message is kept as raw bytes: git writes commit messages in the
//! configured `i18n.commitEncoding`, which need not be UTF-8.

use crate::domain::IssuePrefix;

/// Values available to a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData {
    /// The original commit message, byte for byte.
    pub message: Vec<u8>,
    /// Issue number from the branch name.
    pub number: String,
    /// Repository from the matching rule, empty for bare-issue rules.
    pub repo: String,
    /// Rendered issue reference, e.g. `org/repo#123` or `#123`.
    pub prefix: String,
}

impl TemplateData {
    pub fn new(message: &[u8], prefix: &IssuePrefix) -> Self {
        TemplateData {
            message: message.to_vec(),
            number: prefix.issue.clone(),
            repo: prefix.repo_str().to_string(),
            prefix: prefix.to_string(),
        }
    }

    fn field(&self, name: &str) -> Option<&[u8]> {
        match name {
            "Message" => Some(self.message.as_slice()),
            "Number" => Some(self.number.as_bytes()),
            "Repo" => Some(self.repo.as_bytes()),
            "Prefix" => Some(self.prefix.as_bytes()),
            _ => None,
        }
    }
}

/// A template that could not be parsed or rendered.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unclosed action starting at byte {offset}")]
    UnclosedAction { offset: usize },
    #[error("empty action at byte {offset}")]
    EmptyAction { offset: usize },
    #[error("unsupported action '{action}': only field references such as .Message are allowed")]
    UnsupportedAction { action: String },
    #[error("can't evaluate field {0}")]
    UnknownField(String),
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Field(&'a str),
}

/// `[<prefix>] <message>`
pub fn format_default(data: &TemplateData) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.prefix.len() + data.message.len() + 3);
    out.push(b'[');
    out.extend_from_slice(data.prefix.as_bytes());
    out.extend_from_slice(b"] ");
    out.extend_from_slice(&data.message);
    out
}

/// Render `template` against `data`.
pub fn render(template: &str, data: &TemplateData) -> Result<Vec<u8>, TemplateError> {
    let mut out = Vec::with_capacity(template.len() + data.message.len());
    for segment in parse(template)? {
        match segment {
            Segment::Text(text) => out.extend_from_slice(text.as_bytes()),
            Segment::Field(name) => {
                let value = data
                    .field(name)
                    .ok_or_else(|| TemplateError::UnknownField(name.to_string()))?;
                out.extend_from_slice(value);
            }
        }
    }
    Ok(out)
}

/// Format a commit message with the configured template, or the default
/// `[<prefix>] <message>` when there is none.
///
/// A broken template is logged and the default format is used instead.
pub fn apply(template: Option<&str>, data: &TemplateData) -> Vec<u8> {
    let Some(template) = template.filter(|t| !t.is_empty()) else {
        return format_default(data);
    };
    match render(template, data) {
        Ok(message) => message,
        Err(e) => {
            log::warn!("template error: {e}; falling back to default format");
            format_default(data)
        }
    }
}

fn parse(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut rest = template;
    let mut trim_next = false;

    while let Some(start) = rest.find("{{") {
        let offset = template.len() - rest.len() + start;
        let inner = &rest[start + 2..];
        let end = inner
            .find("}}")
            .ok_or(TemplateError::UnclosedAction { offset })?;
        let mut action = &inner[..end];

        let trim_left = match action.strip_prefix('-') {
            Some(a) if a.starts_with(char::is_whitespace) => {
                action = a;
                true
            }
            _ => false,
        };
        let trim_right = match action.strip_suffix('-') {
            Some(a) if a.ends_with(char::is_whitespace) => {
                action = a;
                true
            }
            _ => false,
        };

        let mut text = &rest[..start];
        if trim_next {
            text = text.trim_start();
        }
        if trim_left {
            text = text.trim_end();
        }
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        let action = action.trim();
        if action.is_empty() {
            return Err(TemplateError::EmptyAction { offset });
        }
        if !(action.starts_with("/*") && action.ends_with("*/")) {
            segments.push(Segment::Field(field_name(action)?));
        }

        trim_next = trim_right;
        rest = &inner[end + 2..];
    }

    let text = if trim_next { rest.trim_start() } else { rest };
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    Ok(segments)
}

fn field_name(action: &str) -> Result<&str, TemplateError> {
    action
        .strip_prefix('.')
        .filter(|name| {
            !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
        .ok_or_else(|| TemplateError::UnsupportedAction {
            action: action.to_string(),
        })
}

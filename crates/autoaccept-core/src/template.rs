//! Notification templates.
//!
//! A template is plain text (usually Telegram HTML) with `{name}` placeholders
//! drawn from a fixed set. Templates are parsed once at startup so that an
//! unknown placeholder is a configuration error rather than a per-message one.
//! Braces that do not wrap an identifier are kept as literal text.

use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;

use crate::{
    domain::{Chat, User},
    formatting::escape_html,
};

/// Rendered in place of `{chat_title}` when the chat has no title.
pub const CHAT_TITLE_FALLBACK: &str = "the chat";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unknown placeholder {{{name}}} (expected one of: first_name, last_name, username, chat_title)")]
    UnknownPlaceholder { name: String },
}

/// The placeholders a template may reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    FirstName,
    LastName,
    Username,
    ChatTitle,
}

impl Placeholder {
    /// Raw (unescaped) value for this placeholder.
    fn value(self, user: &User, chat: &Chat) -> String {
        match self {
            Placeholder::FirstName => user.first_name.clone(),
            Placeholder::LastName => user.last_name.clone().unwrap_or_default(),
            Placeholder::Username => user
                .username
                .as_deref()
                .filter(|u| !u.is_empty())
                .map(|u| format!("@{u}"))
                .unwrap_or_default(),
            Placeholder::ChatTitle => chat
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| CHAT_TITLE_FALLBACK.to_string()),
        }
    }
}

impl FromStr for Placeholder {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" => Ok(Placeholder::FirstName),
            "last_name" => Ok(Placeholder::LastName),
            "username" => Ok(Placeholder::Username),
            "chat_title" => Ok(Placeholder::ChatTitle),
            other => Err(TemplateError::UnknownPlaceholder {
                name: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(Placeholder),
}

/// A validated message template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageTemplate {
    source: String,
    segments: Vec<Segment>,
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"))
}

impl MessageTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in placeholder_re().captures_iter(source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Text(source[last..whole.start()].to_string()));
            }
            segments.push(Segment::Field(name.as_str().parse()?));
            last = whole.end();
        }
        if last < source.len() {
            segments.push(Segment::Text(source[last..].to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Substitute user/chat attributes. Values are HTML-escaped; template text is not.
    pub fn render(&self, user: &User, chat: &Chat) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(t) => out.push_str(t),
                Segment::Field(p) => out.push_str(&escape_html(&p.value(user, chat))),
            }
        }
        out
    }
}

impl FromStr for MessageTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageTemplate::parse(s)
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// One-shot parse + render.
pub fn render(template: &str, user: &User, chat: &Chat) -> Result<String, TemplateError> {
    Ok(MessageTemplate::parse(template)?.render(user, chat))
}

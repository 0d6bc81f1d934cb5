use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::token::{Token, TokenKind};

/// Date layout used by todo.txt for both date slots
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One parsed todo.txt line.
///
/// The four optional head slots are always present as fields, empty or not,
/// so every task has the same shape: leading space, status, priority,
/// completion date, creation date, body tokens, trailing space.
///
/// Fields are public; editing a slot's content in place is how a task is
/// changed. The line is reconstructed from whatever the fields hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Literal run of spaces/tabs before the content
    pub leading_space: String,
    /// `Some("x")` when completed
    pub status: Option<String>,
    /// e.g. `Some("(A)")`
    pub priority: Option<String>,
    pub completion_date: Option<String>,
    pub creation_date: Option<String>,
    /// Project, context, meta and text tokens in source order
    pub body: Vec<Token>,
    /// Literal run of spaces/tabs after the content
    pub trailing_space: String,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status.is_some()
    }

    /// `'x'` for a completed task, otherwise `null_value`
    pub fn status(&self, null_value: char) -> char {
        self.status
            .as_deref()
            .and_then(|s| s.chars().next())
            .unwrap_or(null_value)
    }

    /// The priority letter, e.g. `'A'` for `(A)`
    pub fn priority(&self) -> Option<char> {
        self.priority.as_deref().and_then(|p| p.chars().nth(1))
    }

    pub fn priority_or(&self, null_value: char) -> char {
        self.priority().unwrap_or(null_value)
    }

    pub fn completion_date(&self) -> Option<NaiveDate> {
        parse_date_slot(self.completion_date.as_deref())
    }

    pub fn completion_date_or(&self, null_value: NaiveDate) -> NaiveDate {
        self.completion_date().unwrap_or(null_value)
    }

    pub fn creation_date(&self) -> Option<NaiveDate> {
        parse_date_slot(self.creation_date.as_deref())
    }

    pub fn creation_date_or(&self, null_value: NaiveDate) -> NaiveDate {
        self.creation_date().unwrap_or(null_value)
    }

    /// `+project` tags, prefix included, in source order
    pub fn projects(&self) -> Vec<&str> {
        self.body_contents(TokenKind::Project).collect()
    }

    /// `@context` tags, prefix included, in source order
    pub fn contexts(&self) -> Vec<&str> {
        self.body_contents(TokenKind::Context).collect()
    }

    /// `key:value` pairs grouped by key. Repeated keys accumulate their
    /// values; keys keep the order of their first appearance.
    pub fn metadata(&self) -> IndexMap<&str, Vec<&str>> {
        let mut data: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for meta in self.body_contents(TokenKind::Meta) {
            if let Some((key, value)) = meta.split_once(':') {
                data.entry(key).or_default().push(value);
            }
        }
        data
    }

    /// The full token sequence, fixed slots included
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.body.len() + 6);
        tokens.push(Token::new(TokenKind::LeadingSpace, self.leading_space.clone()));
        tokens.extend(self.head_tokens());
        tokens.extend(self.body.iter().cloned());
        tokens.push(Token::new(TokenKind::TrailingSpace, self.trailing_space.clone()));
        tokens
    }

    /// The four optional slots between the leading space and the body:
    /// status, priority, completion date, creation date.
    pub fn head_tokens(&self) -> [Token; 4] {
        [
            slot(TokenKind::Status, &self.status),
            slot(TokenKind::Priority, &self.priority),
            slot(TokenKind::CompletionDate, &self.completion_date),
            slot(TokenKind::CreationDate, &self.creation_date),
        ]
    }

    pub fn body_tokens(&self) -> &[Token] {
        &self.body
    }

    fn body_contents(&self, kind: TokenKind) -> impl Iterator<Item = &str> {
        self.body
            .iter()
            .filter(move |t| t.kind == kind)
            .filter_map(|t| t.content())
    }
}

impl std::str::FromStr for Task {
    type Err = std::convert::Infallible;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Ok(crate::parse::tokenize(line))
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::parse::serialize_task(self))
    }
}

fn slot(kind: TokenKind, content: &Option<String>) -> Token {
    Token {
        kind,
        content: content.clone(),
    }
}

fn parse_date_slot(content: Option<&str>) -> Option<NaiveDate> {
    content.and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
}

use serde::{Deserialize, Serialize};

/// The kind of a segment cut out of a todo.txt line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    LeadingSpace,
    /// `x` completion marker
    Status,
    /// `(A)` through `(Z)`
    Priority,
    CompletionDate,
    CreationDate,
    /// `+project`
    Project,
    /// `@context`
    Context,
    /// `key:value`
    Meta,
    /// Any other word, kept verbatim
    Text,
    TrailingSpace,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::LeadingSpace => "leadingSpace",
            TokenKind::Status => "status",
            TokenKind::Priority => "priority",
            TokenKind::CompletionDate => "completionDate",
            TokenKind::CreationDate => "creationDate",
            TokenKind::Project => "project",
            TokenKind::Context => "context",
            TokenKind::Meta => "meta",
            TokenKind::Text => "text",
            TokenKind::TrailingSpace => "trailingSpace",
        };
        f.write_str(name)
    }
}

/// A `(kind, content)` pair. `content` is `None` for an unmatched optional slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub content: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Token {
            kind,
            content: Some(content.into()),
        }
    }

    /// A fixed slot with nothing in it
    pub fn absent(kind: TokenKind) -> Self {
        Token {
            kind,
            content: None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.content.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_matches_serde_name() {
        let json = serde_json::to_string(&TokenKind::CompletionDate).unwrap();
        assert_eq!(json, "\"completionDate\"");
        assert_eq!(TokenKind::CompletionDate.to_string(), "completionDate");
    }

    #[test]
    fn test_absent_token() {
        let token = Token::absent(TokenKind::Priority);
        assert!(!token.is_present());
        assert_eq!(token.content(), None);
    }
}

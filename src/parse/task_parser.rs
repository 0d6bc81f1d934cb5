use std::collections::VecDeque;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::model::task::{DATE_FORMAT, Task};
use crate::model::token::{Token, TokenKind};

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));

/// Check that a string is a `YYYY-MM-DD` date naming a real calendar day
pub fn is_iso_date(s: &str) -> bool {
    ISO_DATE_RE.is_match(s) && NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok()
}

/// Split one todo.txt line into a task.
///
/// Never fails: any word that doesn't fit a special pattern becomes a
/// `Text` token. Runs of spaces inside the line produce empty `Text`
/// tokens so that joining with single spaces gives the line back.
pub fn tokenize(line: &str) -> Task {
    let core = line.trim_matches(is_space);
    let start = line.len() - line.trim_start_matches(is_space).len();
    let leading_space = &line[..start];
    let trailing_space = &line[start + core.len()..];

    let mut items: VecDeque<&str> = core.split(' ').collect();

    // Status
    let status = take_if(&mut items, |item| item == "x");

    // Priority: `(A)` .. `(Z)`
    let priority = take_if(&mut items, is_priority);

    // Dates: two in a row are completion + creation, a lone one is creation
    let (completion_date, creation_date) = match items.front() {
        Some(first) if is_iso_date(*first) => {
            let completion = if items.get(1).is_some_and(|second| is_iso_date(*second)) {
                items.pop_front()
            } else {
                None
            };
            (completion, items.pop_front())
        }
        _ => (None, None),
    };

    let body = items
        .into_iter()
        .map(|item| Token::new(classify_body_item(item), item))
        .collect();

    Task {
        leading_space: leading_space.to_string(),
        status: status.map(str::to_string),
        priority: priority.map(str::to_string),
        completion_date: completion_date.map(str::to_string),
        creation_date: creation_date.map(str::to_string),
        body,
        trailing_space: trailing_space.to_string(),
    }
}

/// Classify one body word. Order matters: project, context, meta, text.
pub fn classify_body_item(item: &str) -> TokenKind {
    let mut chars = item.chars();
    let first = chars.next();
    let second = chars.next();

    match (first, second) {
        (Some('+'), Some(c)) if c != '+' => return TokenKind::Project,
        (Some('@'), Some(c)) if c != '@' => return TokenKind::Context,
        _ => {}
    }

    if item.chars().count() > 2
        && first.is_some_and(|c| c.is_ascii_alphabetic())
        && item.matches(':').count() == 1
    {
        return TokenKind::Meta;
    }

    TokenKind::Text
}

fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_priority(item: &str) -> bool {
    let bytes = item.as_bytes();
    bytes.len() == 3 && bytes[0] == b'(' && bytes[1].is_ascii_uppercase() && bytes[2] == b')'
}

fn take_if<'a>(items: &mut VecDeque<&'a str>, pred: impl Fn(&str) -> bool) -> Option<&'a str> {
    if items.front().is_some_and(|item| pred(*item)) {
        items.pop_front()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn body_kinds(task: &Task) -> Vec<TokenKind> {
        task.body.iter().map(|t| t.kind).collect()
    }

    fn body_text(task: &Task) -> Vec<&str> {
        task.body.iter().filter_map(|t| t.content()).collect()
    }

    #[test]
    fn test_tokenize_full_line() {
        let line = "x (A) 2016-05-20 2016-04-30 Buy milk +home @shopping due:2016-05-25";
        let task = tokenize(line);
        assert_eq!(task.leading_space, "");
        assert_eq!(task.status.as_deref(), Some("x"));
        assert_eq!(task.priority.as_deref(), Some("(A)"));
        assert_eq!(task.completion_date.as_deref(), Some("2016-05-20"));
        assert_eq!(task.creation_date.as_deref(), Some("2016-04-30"));
        assert_eq!(
            body_kinds(&task),
            vec![
                TokenKind::Text,
                TokenKind::Text,
                TokenKind::Project,
                TokenKind::Context,
                TokenKind::Meta,
            ]
        );
        assert_eq!(task.trailing_space, "");
        assert_eq!(task.to_string(), line);
    }

    #[test]
    fn test_tokenize_surrounding_whitespace() {
        let line = "   Just a plain task   ";
        let task = tokenize(line);
        assert_eq!(task.leading_space, "   ");
        assert_eq!(task.trailing_space, "   ");
        assert_eq!(task.status, None);
        assert_eq!(task.priority, None);
        assert_eq!(task.completion_date, None);
        assert_eq!(task.creation_date, None);
        assert_eq!(body_text(&task), vec!["Just", "a", "plain", "task"]);
        assert!(task.body.iter().all(|t| t.kind == TokenKind::Text));
        assert_eq!(task.to_string(), line);
    }

    #[test]
    fn test_tabs_are_kept_verbatim() {
        let line = "\t (C) tabbed \t";
        let task = tokenize(line);
        assert_eq!(task.leading_space, "\t ");
        assert_eq!(task.trailing_space, " \t");
        assert_eq!(task.priority.as_deref(), Some("(C)"));
        assert_eq!(task.to_string(), line);
    }

    #[test]
    fn test_single_date_is_creation_date() {
        let task = tokenize("2020-02-29 Leap day");
        assert_eq!(task.completion_date, None);
        assert_eq!(task.creation_date.as_deref(), Some("2020-02-29"));
        assert_eq!(body_text(&task), vec!["Leap", "day"]);
    }

    #[test]
    fn test_dates_only_recognized_in_position() {
        let task = tokenize("Meeting 2020-01-01 2020-01-02");
        assert_eq!(task.completion_date, None);
        assert_eq!(task.creation_date, None);
        assert_eq!(task.body.len(), 3);
    }

    #[test]
    fn test_invalid_calendar_date_is_text() {
        let task = tokenize("2021-02-30 Not a date");
        assert_eq!(task.creation_date, None);
        assert_eq!(task.body[0].content(), Some("2021-02-30"));
        assert_eq!(task.body[0].kind, TokenKind::Text);
    }

    #[test]
    fn test_status_must_be_exact() {
        assert_eq!(tokenize("X done").status, None);
        assert_eq!(tokenize("xylophone lesson").status, None);
        assert_eq!(tokenize("(A) x later").status, None);
    }

    #[test]
    fn test_priority_shapes() {
        assert_eq!(tokenize("(Z) low").priority.as_deref(), Some("(Z)"));
        assert_eq!(tokenize("(a) lower").priority, None);
        assert_eq!(tokenize("(AB) wide").priority, None);
        assert_eq!(tokenize("x (B) done").priority.as_deref(), Some("(B)"));
    }

    #[test]
    fn test_classify_body_items() {
        assert_eq!(classify_body_item("+proj"), TokenKind::Project);
        assert_eq!(classify_body_item("++proj"), TokenKind::Text);
        assert_eq!(classify_body_item("+"), TokenKind::Text);
        assert_eq!(classify_body_item("@phone"), TokenKind::Context);
        assert_eq!(classify_body_item("@@phone"), TokenKind::Text);
        assert_eq!(classify_body_item("@"), TokenKind::Text);
        assert_eq!(classify_body_item("due:2020-01-01"), TokenKind::Meta);
        assert_eq!(classify_body_item("a:"), TokenKind::Text);
        assert_eq!(classify_body_item("ab:"), TokenKind::Meta);
        assert_eq!(classify_body_item("1:2"), TokenKind::Text);
        assert_eq!(classify_body_item("http://x.y:80"), TokenKind::Text);
        assert_eq!(classify_body_item("word,"), TokenKind::Text);
    }

    #[test]
    fn test_double_spaces_survive() {
        let line = "(A)  two  spaces";
        let task = tokenize(line);
        assert_eq!(body_text(&task), vec!["", "two", "", "spaces"]);
        assert_eq!(task.to_string(), line);
    }

    #[test]
    fn test_whitespace_only_line() {
        let task = tokenize(" \t ");
        assert_eq!(task.leading_space, " \t ");
        assert_eq!(task.trailing_space, "");
        assert_eq!(task.to_string(), " \t ");
    }

    #[test]
    fn test_is_iso_date() {
        assert!(is_iso_date("2016-05-20"));
        assert!(!is_iso_date("2016-5-20"));
        assert!(!is_iso_date("2016-13-01"));
        assert!(!is_iso_date("+016-05-20"));
        assert!(!is_iso_date("20160520"));
        assert!(!is_iso_date(""));
    }
}

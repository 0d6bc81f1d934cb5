use crate::model::task::Task;

/// Rebuild the line a task was parsed from.
///
/// Leading and trailing whitespace are emitted verbatim. Everything between
/// them is joined with single spaces, skipping empty slots so that a task
/// without a priority or dates doesn't grow extra separators.
pub fn serialize_task(task: &Task) -> String {
    let head = [
        &task.status,
        &task.priority,
        &task.completion_date,
        &task.creation_date,
    ];
    let parts: Vec<&str> = head
        .into_iter()
        .filter_map(|slot| slot.as_deref())
        .chain(task.body.iter().filter_map(|t| t.content()))
        .collect();

    let mut line =
        String::with_capacity(task.leading_space.len() + task.trailing_space.len() + 64);
    line.push_str(&task.leading_space);
    line.push_str(&parts.join(" "));
    line.push_str(&task.trailing_space);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::token::{Token, TokenKind};
    use pretty_assertions::assert_eq;

    fn bare_task() -> Task {
        Task {
            leading_space: String::new(),
            status: None,
            priority: None,
            completion_date: None,
            creation_date: None,
            body: Vec::new(),
            trailing_space: String::new(),
        }
    }

    #[test]
    fn test_serialize_body_only() {
        let mut task = bare_task();
        task.body = vec![
            Token::new(TokenKind::Text, "Call"),
            Token::new(TokenKind::Text, "mom"),
            Token::new(TokenKind::Context, "@phone"),
        ];
        assert_eq!(serialize_task(&task), "Call mom @phone");
    }

    #[test]
    fn test_absent_slots_add_no_separator() {
        let mut task = bare_task();
        task.priority = Some("(B)".to_string());
        task.creation_date = Some("2024-01-05".to_string());
        task.body = vec![Token::new(TokenKind::Text, "Stretch")];
        assert_eq!(serialize_task(&task), "(B) 2024-01-05 Stretch");
    }

    #[test]
    fn test_surrounding_space_not_separated() {
        let mut task = bare_task();
        task.leading_space = "  ".to_string();
        task.trailing_space = "\t".to_string();
        task.status = Some("x".to_string());
        task.body = vec![Token::new(TokenKind::Text, "done")];
        assert_eq!(serialize_task(&task), "  x done\t");
    }

    #[test]
    fn test_absent_body_token_is_skipped() {
        let mut task = bare_task();
        task.body = vec![
            Token::new(TokenKind::Text, "keep"),
            Token::absent(TokenKind::Text),
            Token::new(TokenKind::Project, "+this"),
        ];
        assert_eq!(serialize_task(&task), "keep +this");
    }
}

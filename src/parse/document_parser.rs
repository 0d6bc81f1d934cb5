use crate::model::document::{Document, LineEntry};
use crate::model::task::Task;

use super::task_parser::tokenize;

/// Parse a whole todo.txt file.
///
/// Lines are split on `\n` only; a `\r` before it stays part of the line.
pub fn parse_document(text: &str) -> Document {
    let entries: Vec<LineEntry> = text
        .split('\n')
        .enumerate()
        .map(|(line_index, line)| LineEntry {
            line_index,
            raw: line.to_string(),
            task: parse_line(line),
        })
        .collect();

    log::trace!(
        "event=parse module=document lines={} tasks={}",
        entries.len(),
        entries.iter().filter(|e| e.task.is_some()).count()
    );

    Document {
        raw: text.to_string(),
        entries,
    }
}

/// Tokenize a line unless it is blank
pub fn parse_line(line: &str) -> Option<Task> {
    if line.trim().is_empty() {
        None
    } else {
        Some(tokenize(line))
    }
}

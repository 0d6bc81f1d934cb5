use serde::Serialize;

use super::task::Task;
use crate::ops::view::QueryView;

/// One line of the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineEntry {
    /// Position in the source (0-indexed)
    pub line_index: usize,
    /// The line exactly as it appeared in the source
    pub raw: String,
    /// `None` for blank lines, which are re-emitted from `raw`
    pub task: Option<Task>,
}

/// A parsed todo.txt file.
///
/// Every source line has an entry, blank ones included, so that
/// writing it back out reproduces the input byte-for-byte.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) raw: String,
    pub(crate) entries: Vec<LineEntry>,
}

impl Document {
    pub fn parse(text: &str) -> Document {
        crate::parse::parse_document(text)
    }

    /// Parse a single line; `None` if it is blank
    pub fn parse_line(line: &str) -> Option<Task> {
        crate::parse::parse_line(line)
    }

    pub fn is_iso_date(s: &str) -> bool {
        crate::parse::is_iso_date(s)
    }

    /// The text this document was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn entries(&self) -> &[LineEntry] {
        &self.entries
    }

    /// Every task, mutable, in source order. Line indices, raw text and
    /// blank lines stay fixed; only task contents can change.
    pub fn tasks_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.entries.iter_mut().filter_map(|e| e.task.as_mut())
    }

    /// Entries that carry a task
    pub fn task_entries(&self) -> impl Iterator<Item = &LineEntry> {
        self.entries.iter().filter(|e| e.task.is_some())
    }

    pub fn tasks(&self) -> Vec<&Task> {
        self.entries.iter().filter_map(|e| e.task.as_ref()).collect()
    }

    /// The task on the given source line, if that line holds one
    pub fn task_mut(&mut self, line_index: usize) -> Option<&mut Task> {
        self.entries
            .get_mut(line_index)
            .and_then(|e| e.task.as_mut())
    }

    /// A query view over every task in the document, in source order
    pub fn view(&self) -> QueryView<'_> {
        QueryView::new(self, self.task_entries().collect())
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::parse::serialize_document(self))
    }
}

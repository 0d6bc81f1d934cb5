use crate::model::config::QueryDefaults;
use crate::model::document::{Document, LineEntry};
use crate::model::task::Task;

use super::filter::{FilterRequest, apply_filters, resolve_filters};
use super::sort::{SortRequest, apply_sort, resolve_sort_keys};

/// A filtered and/or reordered selection of a document's tasks.
///
/// Views borrow their entries from the document; `filter` and `sort`
/// return a new view and leave the receiver untouched, so queries chain:
///
/// ```
/// use todotxt::model::Document;
/// use todotxt::ops::{FilterRequest, SortRequest};
///
/// let doc = Document::parse("(B) Mow lawn +home\n(A) File taxes +home\nCall bank");
/// let view = doc
///     .view()
///     .filter(&[FilterRequest::new("project", ["+home"])])
///     .sort(&[SortRequest::Default]);
/// assert_eq!(view.to_string(), "1: (A) File taxes +home\n0: (B) Mow lawn +home");
/// ```
#[derive(Debug, Clone)]
pub struct QueryView<'a> {
    document: &'a Document,
    entries: Vec<&'a LineEntry>,
    defaults: QueryDefaults,
}

impl<'a> QueryView<'a> {
    pub(crate) fn new(document: &'a Document, entries: Vec<&'a LineEntry>) -> Self {
        QueryView {
            document,
            entries,
            defaults: QueryDefaults::default(),
        }
    }

    /// Use different null values and sort orders for later queries
    pub fn with_defaults(mut self, defaults: QueryDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &QueryDefaults {
        &self.defaults
    }

    /// The document this view was taken from
    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn entries(&self) -> &[&'a LineEntry] {
        &self.entries
    }

    /// Tasks in view order
    pub fn iter(&self) -> impl Iterator<Item = &'a Task> + '_ {
        self.entries.iter().filter_map(|e| e.task.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep the tasks matching every request. Tag matching is case-sensitive.
    pub fn filter(&self, requests: &[FilterRequest]) -> QueryView<'a> {
        self.filter_with_case(requests, false)
    }

    /// Like [`QueryView::filter`], optionally lowercasing project and
    /// context tags and keywords before comparing.
    pub fn filter_with_case(
        &self,
        requests: &[FilterRequest],
        case_insensitive: bool,
    ) -> QueryView<'a> {
        let options = resolve_filters(requests, &self.defaults);
        let entries = apply_filters(self.entries.clone(), &options, case_insensitive);
        self.derive(entries)
    }

    pub fn sort(&self, requests: &[SortRequest]) -> QueryView<'a> {
        let keys = resolve_sort_keys(requests, &self.defaults);
        let entries = apply_sort(self.entries.clone(), &keys);
        self.derive(entries)
    }

    fn derive(&self, entries: Vec<&'a LineEntry>) -> QueryView<'a> {
        QueryView {
            document: self.document,
            entries,
            defaults: self.defaults.clone(),
        }
    }
}

/// `line_index: task` pairs, one per line. For display only; this is not
/// a todo.txt file.
impl std::fmt::Display for QueryView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            match &entry.task {
                Some(task) => write!(f, "{}: {}", entry.line_index, task)?,
                None => write!(f, "{}: {}", entry.line_index, entry.raw)?,
            }
        }
        Ok(())
    }
}

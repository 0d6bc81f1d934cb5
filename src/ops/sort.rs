use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::config::QueryDefaults;
use crate::model::document::LineEntry;
use crate::model::task::{DATE_FORMAT, Task};

use super::QueryError;

/// Name of the request that sorts by priority, then pushes done tasks down
pub const DEFAULT_SORT: &str = "default";

/// Fields a view can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Status,
    Priority,
    CreationDate,
    CompletionDate,
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(SortField::Status),
            "priority" => Ok(SortField::Priority),
            "creationDate" => Ok(SortField::CreationDate),
            "completionDate" => Ok(SortField::CompletionDate),
            other => Err(QueryError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(QueryError::UnknownOrder(other.to_string())),
        }
    }
}

/// One sort step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortRequest {
    /// Priority, then status; replaces any earlier priority/status step
    Default,
    Field {
        field: String,
        order: Option<SortOrder>,
        null_value: Option<String>,
    },
}

impl SortRequest {
    pub fn field(field: impl Into<String>) -> Self {
        SortRequest::Field {
            field: field.into(),
            order: None,
            null_value: None,
        }
    }

    pub fn order(self, order: SortOrder) -> Self {
        match self {
            SortRequest::Field {
                field, null_value, ..
            } => SortRequest::Field {
                field,
                order: Some(order),
                null_value,
            },
            SortRequest::Default => SortRequest::Default,
        }
    }

    pub fn null_value(self, value: impl Into<String>) -> Self {
        match self {
            SortRequest::Field { field, order, .. } => SortRequest::Field {
                field,
                order,
                null_value: Some(value.into()),
            },
            SortRequest::Default => SortRequest::Default,
        }
    }

    /// Build a request from positional parts: `field [asc|desc] [null_value]`.
    ///
    /// The second part is taken as the order only if it reads `asc` or
    /// `desc`; otherwise it is the null value. Returns `None` for no parts.
    pub fn from_parts(parts: &[&str]) -> Option<Self> {
        let (field, rest) = parts.split_first()?;
        if *field == DEFAULT_SORT {
            return Some(SortRequest::Default);
        }
        let mut rest = rest.iter();
        let mut request = SortRequest::field(*field);
        let mut next = rest.next();
        if let Some(order) = next.and_then(|s| s.parse::<SortOrder>().ok()) {
            request = request.order(order);
            next = rest.next();
        }
        if let Some(null_value) = next {
            request = request.null_value(*null_value);
        }
        Some(request)
    }
}

/// Value substituted when a task lacks the sorted field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortNull {
    Char(char),
    Date(NaiveDate),
}

/// A resolved sort step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
    pub null_value: SortNull,
}

impl SortKey {
    /// The field's built-in order and null value
    pub fn builtin(field: SortField, defaults: &QueryDefaults) -> Self {
        let (order, null_value) = match field {
            SortField::Status => (
                defaults.status_order,
                SortNull::Char(first_char(&defaults.status_null, 'o')),
            ),
            SortField::Priority => (
                defaults.priority_order,
                SortNull::Char(first_char(&defaults.priority_null, '~')),
            ),
            SortField::CreationDate => {
                (defaults.creation_date_order, SortNull::Date(defaults.date_null))
            }
            SortField::CompletionDate => {
                (defaults.completion_date_order, SortNull::Date(defaults.date_null))
            }
        };
        SortKey {
            field,
            order,
            null_value,
        }
    }

    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ordering = match (self.field, self.null_value) {
            (SortField::Status, SortNull::Char(null)) => a.status(null).cmp(&b.status(null)),
            // `(A)` outranks `(B)`, so letters compare backwards
            (SortField::Priority, SortNull::Char(null)) => {
                b.priority_or(null).cmp(&a.priority_or(null))
            }
            (SortField::CreationDate, SortNull::Date(null)) => {
                a.creation_date_or(null).cmp(&b.creation_date_or(null))
            }
            (SortField::CompletionDate, SortNull::Date(null)) => {
                a.completion_date_or(null).cmp(&b.completion_date_or(null))
            }
            _ => Ordering::Equal,
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Resolve sort requests into the ordered list of passes.
///
/// A later request for a field replaces the earlier one and moves to the
/// back. Unknown fields are skipped.
pub fn resolve_sort_keys(requests: &[SortRequest], defaults: &QueryDefaults) -> Vec<SortKey> {
    let mut keys: IndexMap<SortField, SortKey> = IndexMap::new();

    for request in requests {
        let (field, order, null_value) = match request {
            SortRequest::Default => {
                push_default(&mut keys, defaults);
                continue;
            }
            SortRequest::Field { field, .. } if field == DEFAULT_SORT => {
                push_default(&mut keys, defaults);
                continue;
            }
            SortRequest::Field {
                field,
                order,
                null_value,
            } => (field, order, null_value),
        };

        let field: SortField = match field.parse() {
            Ok(f) => f,
            Err(e) => {
                log::debug!("event=sort_skip module=query reason=\"{}\"", e);
                continue;
            }
        };

        let mut key = SortKey::builtin(field, defaults);
        if let Some(order) = order {
            key.order = *order;
        }
        if let Some(value) = null_value {
            key.null_value = match key.null_value {
                SortNull::Char(fallback) => SortNull::Char(first_char(value, fallback)),
                SortNull::Date(fallback) => SortNull::Date(
                    NaiveDate::parse_from_str(value, DATE_FORMAT).unwrap_or(fallback),
                ),
            };
        }

        keys.shift_remove(&field);
        keys.insert(field, key);
    }

    keys.into_values().collect()
}

/// Run one stable sort pass per key, in order. The last key ends up as the
/// primary ordering; earlier keys only break its ties.
pub fn apply_sort<'a>(mut entries: Vec<&'a LineEntry>, keys: &[SortKey]) -> Vec<&'a LineEntry> {
    for key in keys {
        entries.sort_by(|a, b| match (&a.task, &b.task) {
            (Some(a), Some(b)) => key.compare(a, b),
            _ => Ordering::Equal,
        });
    }
    entries
}

fn push_default(keys: &mut IndexMap<SortField, SortKey>, defaults: &QueryDefaults) {
    for field in [SortField::Priority, SortField::Status] {
        keys.shift_remove(&field);
        keys.insert(field, SortKey::builtin(field, defaults));
    }
}

fn first_char(s: &str, fallback: char) -> char {
    s.chars().next().unwrap_or(fallback)
}

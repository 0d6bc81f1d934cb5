use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ops::sort::SortOrder;

/// Per-field fallbacks used by filter and sort when a task lacks the field,
/// plus the built-in sort direction of each field.
///
/// Missing keys deserialize to the built-in values, so an embedding
/// application can override just the ones it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDefaults {
    pub status_null: String,
    pub priority_null: String,
    pub project_null: String,
    pub context_null: String,
    /// Stands in for a missing completion or creation date
    pub date_null: NaiveDate,
    pub status_order: SortOrder,
    pub priority_order: SortOrder,
    pub creation_date_order: SortOrder,
    pub completion_date_order: SortOrder,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        QueryDefaults {
            status_null: "o".to_string(),
            priority_null: "~".to_string(),
            project_null: "+null".to_string(),
            context_null: "@null".to_string(),
            date_null: NaiveDate::default(),
            status_order: SortOrder::Asc,
            priority_order: SortOrder::Desc,
            creation_date_order: SortOrder::Desc,
            completion_date_order: SortOrder::Desc,
        }
    }
}

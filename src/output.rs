use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::model::document::LineEntry;
use crate::model::task::Task;
use crate::ops::view::QueryView;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

/// The structured fields of a task, independent of how its line is spelled
#[derive(Debug, Serialize)]
pub struct TaskJson {
    pub text: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ViewEntryJson {
    pub line: usize,
    #[serde(flatten)]
    pub task: TaskJson,
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        text: task.to_string(),
        completed: task.is_completed(),
        priority: task.priority(),
        completion_date: task.completion_date(),
        creation_date: task.creation_date(),
        projects: task.projects().into_iter().map(String::from).collect(),
        contexts: task.contexts().into_iter().map(String::from).collect(),
        metadata: task
            .metadata()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
            .collect(),
    }
}

fn entry_to_json(entry: &LineEntry) -> Option<ViewEntryJson> {
    entry.task.as_ref().map(|task| ViewEntryJson {
        line: entry.line_index,
        task: task_to_json(task),
    })
}

/// Serialize a view's tasks, in view order, as a JSON array
pub fn to_json(view: &QueryView<'_>) -> serde_json::Result<String> {
    let entries: Vec<ViewEntryJson> = view
        .entries()
        .iter()
        .filter_map(|entry| entry_to_json(entry))
        .collect();
    serde_json::to_string_pretty(&entries)
}

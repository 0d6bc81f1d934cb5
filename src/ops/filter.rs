use std::str::FromStr;

use crate::model::config::QueryDefaults;
use crate::model::document::LineEntry;
use crate::model::task::Task;

use super::QueryError;

/// Fields a view can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Status,
    Priority,
    Project,
    Context,
}

impl FilterField {
    /// Stand-in value for tasks that don't have this field
    pub fn default_null(self, defaults: &QueryDefaults) -> &str {
        match self {
            FilterField::Status => &defaults.status_null,
            FilterField::Priority => &defaults.priority_null,
            FilterField::Project => &defaults.project_null,
            FilterField::Context => &defaults.context_null,
        }
    }
}

impl FromStr for FilterField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(FilterField::Status),
            "priority" => Ok(FilterField::Priority),
            "project" => Ok(FilterField::Project),
            "context" => Ok(FilterField::Context),
            other => Err(QueryError::UnknownField(other.to_string())),
        }
    }
}

/// One filter step: keep tasks whose `field` matches any of `keywords`.
///
/// Tasks without the field are matched through `null_value`, or the
/// field's default stand-in (`o`, `~`, `+null`, `@null`) when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRequest {
    pub field: String,
    pub keywords: Vec<String>,
    pub null_value: Option<String>,
}

impl FilterRequest {
    pub fn new<I, S>(field: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterRequest {
            field: field.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            null_value: None,
        }
    }

    pub fn null_value(mut self, value: impl Into<String>) -> Self {
        self.null_value = Some(value.into());
        self
    }

    /// Check the request and fill in the field's null value
    pub fn resolve(&self, defaults: &QueryDefaults) -> Result<FilterOption, QueryError> {
        let field: FilterField = self.field.parse()?;
        if self.keywords.is_empty() {
            return Err(QueryError::EmptyKeywords(self.field.clone()));
        }
        let null_value = match &self.null_value {
            Some(v) => v.clone(),
            None => field.default_null(defaults).to_string(),
        };
        Ok(FilterOption {
            field,
            keywords: self.keywords.clone(),
            null_value,
        })
    }
}

/// A validated filter step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub field: FilterField,
    pub keywords: Vec<String>,
    pub null_value: String,
}

impl FilterOption {
    pub fn matches(&self, task: &Task, case_insensitive: bool) -> bool {
        match self.field {
            FilterField::Status => {
                let status = task.status.as_deref().unwrap_or(&self.null_value);
                self.keywords.iter().any(|k| k == status)
            }
            FilterField::Priority => {
                let priority = match task.priority() {
                    Some(letter) => letter.to_string(),
                    None => self.null_value.clone(),
                };
                self.keywords.iter().any(|k| *k == priority)
            }
            FilterField::Project => self.tags_match(task.projects(), case_insensitive),
            FilterField::Context => self.tags_match(task.contexts(), case_insensitive),
        }
    }

    fn tags_match(&self, tags: Vec<&str>, case_insensitive: bool) -> bool {
        let tags = if tags.is_empty() {
            vec![self.null_value.as_str()]
        } else {
            tags
        };
        if case_insensitive {
            let keywords: Vec<String> = self.keywords.iter().map(|k| k.to_lowercase()).collect();
            tags.iter().any(|tag| keywords.contains(&tag.to_lowercase()))
        } else {
            tags.iter().any(|tag| self.keywords.iter().any(|k| k == tag))
        }
    }
}

/// Resolve requests in order, dropping the ones that don't resolve
pub fn resolve_filters(requests: &[FilterRequest], defaults: &QueryDefaults) -> Vec<FilterOption> {
    requests
        .iter()
        .filter_map(|request| match request.resolve(defaults) {
            Ok(option) => Some(option),
            Err(e) => {
                log::debug!("event=filter_skip module=query reason=\"{}\"", e);
                None
            }
        })
        .collect()
}

/// Narrow `entries` by each option in turn
pub fn apply_filters<'a>(
    mut entries: Vec<&'a LineEntry>,
    options: &[FilterOption],
    case_insensitive: bool,
) -> Vec<&'a LineEntry> {
    for option in options {
        entries.retain(|entry| {
            entry
                .task
                .as_ref()
                .is_some_and(|task| option.matches(task, case_insensitive))
        });
    }
    entries
}

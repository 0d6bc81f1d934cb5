pub mod filter;
pub mod sort;
pub mod view;

pub use filter::{FilterField, FilterRequest};
pub use sort::{SortField, SortOrder, SortRequest};
pub use view::QueryView;

/// Error type for turning loosely-typed query requests into typed fields.
///
/// Views never surface these: a request that fails to resolve is skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown sort order: {0} (expected asc or desc)")]
    UnknownOrder(String),
    #[error("no keywords given for filter on {0}")]
    EmptyKeywords(String),
}

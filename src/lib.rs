//! Lossless todo.txt parsing with chainable filter and sort views.
//!
//! A [`Document`] keeps every source line so it can be written back
//! byte-for-byte; each non-blank line becomes a [`Task`] made of typed
//! tokens. [`QueryView`]s select and reorder a document's tasks without
//! copying or changing them.

pub mod model;
pub mod ops;
pub mod output;
pub mod parse;

pub use model::{Document, LineEntry, QueryDefaults, Task, Token, TokenKind};
pub use ops::{FilterRequest, QueryError, QueryView, SortOrder, SortRequest};

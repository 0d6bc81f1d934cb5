pub mod document_parser;
pub mod document_serializer;
pub mod task_parser;
pub mod task_serializer;

pub use document_parser::{parse_document, parse_line};
pub use document_serializer::serialize_document;
pub use task_parser::{classify_body_item, is_iso_date, tokenize};
pub use task_serializer::serialize_task;

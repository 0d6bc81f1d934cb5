use crate::model::document::Document;

use super::task_serializer::serialize_task;

/// Rebuild the full text of a document.
///
/// Task lines are regenerated from their tokens; blank lines come back
/// from the stored raw text. Unedited documents reproduce their input
/// byte-for-byte.
pub fn serialize_document(doc: &Document) -> String {
    doc.entries()
        .iter()
        .map(|entry| match &entry.task {
            Some(task) => serialize_task(task),
            None => entry.raw.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

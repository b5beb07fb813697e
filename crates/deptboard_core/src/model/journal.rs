//! Journal venue record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a journal.
pub type JournalId = Uuid;

/// A publication venue. Created inline during paper editing when absent.
///
/// No field-level validation on purpose: the entry form accepts free text
/// and the original flow persists whatever was typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Stable global ID, durable once persisted.
    pub uuid: JournalId,
    pub title: String,
    pub publisher: String,
    pub issn: String,
}

impl Journal {
    /// Creates a journal with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        publisher: impl Into<String>,
        issn: impl Into<String>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            title: title.into(),
            publisher: publisher.into(),
            issn: issn.into(),
        }
    }
}

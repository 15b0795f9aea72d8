//! Contact domain model.

use serde::{Deserialize, Serialize};

/// Store-assigned primary key of a contact row.
pub type ContactId = i64;

/// A contact as persisted in the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Primary key, assigned by the store on insert.
    pub id: ContactId,
    /// External business key. Expected to be unique across contacts.
    pub identifier: String,
}

impl Contact {
    pub fn new(id: ContactId, identifier: impl Into<String>) -> Self {
        Self {
            id,
            identifier: identifier.into(),
        }
    }
}

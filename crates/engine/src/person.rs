//! The module contains the `Person` struct.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An attendee of the event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Stable identifier assigned by the store.
    pub id: Uuid,
    pub name: String,
}

impl Person {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}

//! The module contains the `IndividualItem` struct.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Amount;

/// Something consumed by a single person.
///
/// `person_id` is not checked against the tab: an item whose person no longer
/// exists is an orphan and is left out of the per-person totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndividualItem {
    pub id: Uuid,
    pub person_id: Uuid,
    pub item_name: String,
    pub cost: Amount,
}

impl IndividualItem {
    pub fn new(person_id: Uuid, item_name: String, cost: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            person_id,
            item_name,
            cost,
        }
    }
}

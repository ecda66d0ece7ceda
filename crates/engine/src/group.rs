//! The module contains the `Group` struct.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Amount;

/// A shared cost split evenly among its members.
///
/// `members` holds person ids in selection order. When a person is removed
/// from the tab it is pruned from here, while `total_cost` stays the same: the
/// remaining members pick up the difference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub total_cost: Amount,
    pub members: Vec<Uuid>,
}

impl Group {
    pub fn new(name: String, total_cost: Amount, members: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            total_cost,
            members,
        }
    }

    /// Amount owed by each member.
    ///
    /// A group without members owes nothing to anyone.
    #[must_use]
    pub fn share(&self) -> Amount {
        if self.members.is_empty() {
            return Amount::ZERO;
        }
        self.total_cost / self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_splits_total_cost_evenly() {
        let group = Group::new(
            "Pizza".to_string(),
            Amount::new(20.0),
            vec![Uuid::new_v4(), Uuid::new_v4()],
        );
        assert_eq!(group.share(), Amount::new(10.0));
    }

    #[test]
    fn empty_group_has_zero_share() {
        let group = Group::new("Nobody".to_string(), Amount::new(15.0), Vec::new());
        assert_eq!(group.share(), Amount::ZERO);
        assert!(group.share().value().is_finite());
    }
}

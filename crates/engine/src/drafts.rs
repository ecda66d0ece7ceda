//! Validation of user input before it reaches the [`Tab`](crate::Tab).
//!
//! The tab accepts anything and silently drops what it cannot use. Front ends
//! that want to tell the user why a form cannot be submitted validate a draft
//! first: a draft that passes is exactly what the tab would store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Amount, EngineError, ResultEngine};

/// Input for a new person.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersonDraft {
    pub name: String,
}

/// Input for a new group.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GroupDraft {
    pub name: String,
    pub total_cost: Amount,
    pub members: Vec<Uuid>,
}

/// Input for a new individual item. The owner is given separately.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemDraft {
    pub item_name: String,
    pub cost: Amount,
}

/// A person draft that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidPerson {
    pub name: String,
}

/// A group draft that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidGroup {
    pub name: String,
    pub total_cost: Amount,
    pub members: Vec<Uuid>,
}

/// An item draft that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidItem {
    pub item_name: String,
    pub cost: Amount,
}

impl PersonDraft {
    pub fn validate(&self) -> ResultEngine<ValidPerson> {
        Ok(ValidPerson {
            name: normalize_required_name(&self.name, "person")?,
        })
    }
}

impl GroupDraft {
    /// Checks name, cost and members.
    ///
    /// Repeated member ids are collapsed, keeping the first occurrence.
    pub fn validate(&self) -> ResultEngine<ValidGroup> {
        let name = normalize_required_name(&self.name, "group")?;
        require_positive(self.total_cost, "group total cost")?;

        let mut members: Vec<Uuid> = Vec::with_capacity(self.members.len());
        for id in &self.members {
            if !members.contains(id) {
                members.push(*id);
            }
        }
        if members.is_empty() {
            return Err(EngineError::EmptyGroup(format!(
                "group '{name}' must have at least one member"
            )));
        }

        Ok(ValidGroup {
            name,
            total_cost: self.total_cost,
            members,
        })
    }
}

impl ItemDraft {
    pub fn validate(&self) -> ResultEngine<ValidItem> {
        let item_name = normalize_required_name(&self.item_name, "item")?;
        require_positive(self.cost, "item cost")?;
        Ok(ValidItem {
            item_name,
            cost: self.cost,
        })
    }
}

pub(crate) fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

fn require_positive(amount: Amount, label: &str) -> ResultEngine<()> {
    // NaN fails this check too.
    if !amount.is_positive() {
        return Err(EngineError::InvalidAmount(format!(
            "{label} must be > 0, got {}",
            amount.value()
        )));
    }
    Ok(())
}

//! Per-person totals.
//!
//! [`compute_totals`] is a pure function of the three collections held by a
//! [`Tab`](crate::Tab). Nothing is cached: callers recompute whenever they need
//! a fresh view.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{Amount, Group, IndividualItem, Person};

/// One line of a person's group breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupShare {
    pub group_name: String,
    pub share: Amount,
}

/// What a single person owes.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonTotal {
    pub person_id: Uuid,
    /// `group_share + individual_total`.
    pub total: Amount,
    pub group_share: Amount,
    pub individual_total: Amount,
    /// The person's items, in insertion order.
    pub items: Vec<IndividualItem>,
    /// The person's group shares, in group order.
    pub group_breakdown: Vec<GroupShare>,
}

impl PersonTotal {
    fn zeroed(person_id: Uuid) -> Self {
        Self {
            person_id,
            total: Amount::ZERO,
            group_share: Amount::ZERO,
            individual_total: Amount::ZERO,
            items: Vec::new(),
            group_breakdown: Vec::new(),
        }
    }
}

/// Result of [`compute_totals`].
#[derive(Clone, Debug, PartialEq)]
pub struct Totals {
    per_person: Vec<PersonTotal>,
    index: HashMap<Uuid, usize>,
    /// Every recorded cost, attributable or not.
    pub grand_total: Amount,
}

impl Totals {
    /// Totals of a person, `None` if the person was not part of the input.
    pub fn get(&self, person_id: Uuid) -> Option<&PersonTotal> {
        self.index.get(&person_id).map(|&i| &self.per_person[i])
    }

    /// Per-person totals in people order.
    pub fn iter(&self) -> impl Iterator<Item = &PersonTotal> {
        self.per_person.iter()
    }

    pub fn len(&self) -> usize {
        self.per_person.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_person.is_empty()
    }

    /// Sum of what people owe.
    ///
    /// Differs from `grand_total` when orphaned items, empty groups or
    /// unknown members exist.
    pub fn attributed_total(&self) -> Amount {
        self.per_person.iter().map(|t| t.total).sum()
    }
}

/// Derives what every person owes.
///
/// - every person gets an entry, even with nothing to pay;
/// - items of unknown people are dropped;
/// - a group's cost is split evenly among its members, a group without members
///   is skipped and members that are not known people are ignored;
/// - `grand_total` is the sum of every group cost and item cost, computed on its
///   own and not from the per-person totals.
pub fn compute_totals(people: &[Person], groups: &[Group], items: &[IndividualItem]) -> Totals {
    let mut per_person: Vec<PersonTotal> = people
        .iter()
        .map(|person| PersonTotal::zeroed(person.id))
        .collect();
    let index: HashMap<Uuid, usize> = people
        .iter()
        .enumerate()
        .map(|(i, person)| (person.id, i))
        .collect();

    for item in items {
        if let Some(&i) = index.get(&item.person_id) {
            let entry = &mut per_person[i];
            entry.individual_total += item.cost;
            entry.items.push(item.clone());
        }
    }

    for group in groups.iter().filter(|g| !g.members.is_empty()) {
        let share = group.share();
        for member in &group.members {
            if let Some(&i) = index.get(member) {
                let entry = &mut per_person[i];
                entry.group_share += share;
                entry.group_breakdown.push(GroupShare {
                    group_name: group.name.clone(),
                    share,
                });
            }
        }
    }

    for entry in &mut per_person {
        entry.total = entry.group_share + entry.individual_total;
    }

    let grand_total = groups.iter().map(|g| g.total_cost).sum::<Amount>()
        + items.iter().map(|i| i.cost).sum::<Amount>();

    Totals {
        per_person,
        index,
        grand_total,
    }
}

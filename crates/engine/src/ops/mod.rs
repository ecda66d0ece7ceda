use crate::{Group, IndividualItem, Person};

mod groups;
mod items;
mod people;
mod reports;

/// Name shown for a group member that is no longer on the tab.
pub const UNKNOWN_PERSON: &str = "Desconocido";

/// The entity store.
///
/// Owns the three collections, each kept in insertion order. Mutations never
/// fail: input the tab cannot use is dropped. Removing a person cleans up the
/// groups and items referring to it within the same call, so a reader never
/// sees a half-removed person.
///
/// Totals are not stored. [`Tab::totals`] recomputes them from scratch.
#[derive(Clone, Debug, Default)]
pub struct Tab {
    people: Vec<Person>,
    groups: Vec<Group>,
    items: Vec<IndividualItem>,
}

impl Tab {
    /// Returns an empty tab.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn items(&self) -> &[IndividualItem] {
        &self.items
    }
}

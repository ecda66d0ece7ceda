use uuid::Uuid;

use crate::{Amount, IndividualItem, ItemDraft, ResultEngine};

use super::Tab;

impl Tab {
    /// Adds an item owned by `person_id` and returns its id.
    ///
    /// The owner is not looked up: an item for an unknown person is stored and
    /// only shows up in the grand total.
    pub fn add_individual_item(&mut self, person_id: Uuid, item_name: &str, cost: Amount) -> Uuid {
        let item = IndividualItem::new(person_id, item_name.to_string(), cost);
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Validates `draft` and adds the item to `person_id`.
    pub fn submit_item(&mut self, person_id: Uuid, draft: &ItemDraft) -> ResultEngine<Uuid> {
        let valid = draft.validate()?;
        Ok(self.add_individual_item(person_id, &valid.item_name, valid.cost))
    }

    /// Removes an item. Unknown ids are ignored.
    pub fn remove_individual_item(&mut self, id: Uuid) {
        self.items.retain(|item| item.id != id);
    }

    pub fn item(&self, id: Uuid) -> Option<&IndividualItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

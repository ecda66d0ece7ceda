use uuid::Uuid;

use crate::{Amount, EngineError, Group, GroupDraft, ResultEngine};

use super::{Tab, UNKNOWN_PERSON};

impl Tab {
    /// Adds a group and returns its id.
    ///
    /// Nothing is checked here: a group without members or with a
    /// non-positive cost is stored as given. See [`GroupDraft`] to validate.
    pub fn add_group(&mut self, name: &str, total_cost: Amount, members: Vec<Uuid>) -> Uuid {
        let group = Group::new(name.to_string(), total_cost, members);
        let id = group.id;
        self.groups.push(group);
        id
    }

    /// Validates `draft` and adds the group.
    ///
    /// Every member must be a person on the tab.
    pub fn submit_group(&mut self, draft: &GroupDraft) -> ResultEngine<Uuid> {
        let valid = draft.validate()?;
        if let Some(unknown) = valid.members.iter().find(|id| self.person(**id).is_none()) {
            return Err(EngineError::UnknownPerson(format!(
                "group '{}' member {unknown} is not on the tab",
                valid.name
            )));
        }
        Ok(self.add_group(&valid.name, valid.total_cost, valid.members))
    }

    /// Removes a group. Unknown ids are ignored.
    pub fn remove_group(&mut self, id: Uuid) {
        self.groups.retain(|g| g.id != id);
    }

    pub fn group(&self, id: Uuid) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Names of a group's members, in member order.
    ///
    /// Ids that do not match a person read as [`UNKNOWN_PERSON`].
    pub fn member_names(&self, group: &Group) -> Vec<String> {
        group
            .members
            .iter()
            .map(|id| self.person_name(*id).unwrap_or(UNKNOWN_PERSON).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_keeps_unvalidated_groups() {
        let mut tab = Tab::new();
        let id = tab.add_group("Free", Amount::new(-1.0), Vec::new());

        let group = tab.group(id).unwrap();
        assert!(group.members.is_empty());
        assert_eq!(group.total_cost, Amount::new(-1.0));
    }

    #[test]
    fn remove_group_leaves_people_and_items() {
        let mut tab = Tab::new();
        let alice = tab.add_person("Alice").unwrap();
        tab.add_individual_item(alice, "Soda", Amount::new(2.0));
        let id = tab.add_group("Pizza", Amount::new(10.0), vec![alice]);

        tab.remove_group(id);
        tab.remove_group(id);

        assert!(tab.groups().is_empty());
        assert_eq!(tab.people().len(), 1);
        assert_eq!(tab.items().len(), 1);
    }

    #[test]
    fn member_names_fall_back_for_unknown_ids() {
        let mut tab = Tab::new();
        let alice = tab.add_person("Alice").unwrap();
        let id = tab.add_group("Pizza", Amount::new(10.0), vec![alice, Uuid::new_v4()]);

        let group = tab.group(id).unwrap().clone();
        assert_eq!(tab.member_names(&group), ["Alice", UNKNOWN_PERSON]);
    }

    #[test]
    fn submit_group_validates_draft() {
        let mut tab = Tab::new();
        let draft = GroupDraft {
            name: "Pizza".to_string(),
            total_cost: Amount::new(20.0),
            members: Vec::new(),
        };
        assert!(tab.submit_group(&draft).is_err());
        assert!(tab.groups().is_empty());
    }

    #[test]
    fn submit_group_rejects_members_not_on_the_tab() {
        let mut tab = Tab::new();
        let alice = tab.add_person("Alice").unwrap();
        let draft = GroupDraft {
            name: "Pizza".to_string(),
            total_cost: Amount::new(20.0),
            members: vec![alice, Uuid::new_v4()],
        };

        assert!(matches!(
            tab.submit_group(&draft),
            Err(EngineError::UnknownPerson(_))
        ));
        assert!(tab.groups().is_empty());

        let totals = tab.totals();
        assert_eq!(totals.grand_total, Amount::ZERO);
        assert_eq!(totals.get(alice).unwrap().total, Amount::ZERO);
    }

    #[test]
    fn submit_group_accepts_known_members() {
        let mut tab = Tab::new();
        let alice = tab.add_person("Alice").unwrap();
        let bob = tab.add_person("Bob").unwrap();
        let draft = GroupDraft {
            name: "Pizza".to_string(),
            total_cost: Amount::new(20.0),
            members: vec![alice, bob],
        };

        let id = tab.submit_group(&draft).unwrap();
        assert_eq!(tab.group(id).unwrap().members, vec![alice, bob]);
        assert_eq!(tab.totals().attributed_total(), Amount::new(20.0));
    }
}

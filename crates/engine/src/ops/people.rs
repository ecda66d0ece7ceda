use uuid::Uuid;

use crate::{Person, PersonDraft, ResultEngine, drafts::normalize_required_name};

use super::Tab;

impl Tab {
    /// Adds a person and returns its id.
    ///
    /// The name is trimmed. A blank name is ignored and `None` is returned.
    pub fn add_person(&mut self, name: &str) -> Option<Uuid> {
        let Ok(name) = normalize_required_name(name, "person") else {
            tracing::debug!("ignoring person with blank name");
            return None;
        };

        Some(self.insert_person(name))
    }

    /// Validates `draft` and adds the person.
    pub fn submit_person(&mut self, draft: &PersonDraft) -> ResultEngine<Uuid> {
        let valid = draft.validate()?;
        Ok(self.insert_person(valid.name))
    }

    fn insert_person(&mut self, name: String) -> Uuid {
        let person = Person::new(name);
        let id = person.id;
        tracing::debug!(%id, name = %person.name, "person added");
        self.people.push(person);
        id
    }

    /// Removes a person together with everything pointing at it.
    ///
    /// - the person leaves every group; group costs are unchanged, so the
    ///   remaining members' shares grow;
    /// - the person's individual items are deleted.
    ///
    /// Unknown ids are ignored.
    pub fn remove_person(&mut self, id: Uuid) {
        let before = self.people.len();
        self.people.retain(|p| p.id != id);
        if self.people.len() == before {
            tracing::debug!(%id, "remove_person: unknown person");
        }

        let mut pruned = 0usize;
        for group in &mut self.groups {
            let members = group.members.len();
            group.members.retain(|m| *m != id);
            pruned += members - group.members.len();
        }

        let items = self.items.len();
        self.items.retain(|item| item.person_id != id);

        tracing::debug!(
            %id,
            groups = pruned,
            items = items - self.items.len(),
            "person removed"
        );
    }

    pub fn person(&self, id: Uuid) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Name of a person, if it is on the tab.
    pub fn person_name(&self, id: Uuid) -> Option<&str> {
        self.person(id).map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Amount;

    #[test]
    fn blank_names_are_ignored() {
        let mut tab = Tab::new();
        assert_eq!(tab.add_person(""), None);
        assert_eq!(tab.add_person("   "), None);
        assert!(tab.people().is_empty());
    }

    #[test]
    fn names_are_trimmed_and_ids_unique() {
        let mut tab = Tab::new();
        let a = tab.add_person(" Alice ").unwrap();
        let b = tab.add_person("Alice").unwrap();

        assert_ne!(a, b);
        assert_eq!(tab.person_name(a), Some("Alice"));
        assert_eq!(tab.people().len(), 2);
    }

    #[test]
    fn removing_unknown_person_changes_nothing() {
        let mut tab = Tab::new();
        let alice = tab.add_person("Alice").unwrap();
        tab.add_group("Pizza", Amount::new(10.0), vec![alice]);
        tab.add_individual_item(alice, "Soda", Amount::new(2.0));

        tab.remove_person(Uuid::new_v4());

        assert_eq!(tab.people().len(), 1);
        assert_eq!(tab.groups()[0].members, vec![alice]);
        assert_eq!(tab.items().len(), 1);
    }

    #[test]
    fn submit_rejects_blank_name() {
        let mut tab = Tab::new();
        let draft = PersonDraft {
            name: " ".to_string(),
        };
        assert!(tab.submit_person(&draft).is_err());
        assert!(tab.people().is_empty());
    }

    #[test]
    fn submit_and_add_store_the_same_person() {
        let mut tab = Tab::new();
        let draft = PersonDraft {
            name: "  Bob ".to_string(),
        };
        let bob = tab.submit_person(&draft).unwrap();
        let alice = tab.add_person(" Alice").unwrap();

        assert_eq!(tab.person_name(bob), Some("Bob"));
        assert_eq!(tab.person_name(alice), Some("Alice"));
        assert_eq!(tab.people()[0].id, bob);
        assert_eq!(tab.people()[1].id, alice);
    }
}

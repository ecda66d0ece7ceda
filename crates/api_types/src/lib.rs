use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response body for any creation endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct Created {
    pub id: Uuid,
}

pub mod people {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PersonNew {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PersonView {
        pub id: Uuid,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PeopleResponse {
        pub people: Vec<PersonView>,
    }
}

pub mod groups {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupNew {
        pub name: String,
        pub total_cost: f64,
        pub members: Vec<Uuid>,
    }

    /// A group as listed to clients.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupView {
        pub id: Uuid,
        pub name: String,
        pub total_cost: f64,
        /// Amount owed by each member, `0` for a group without members.
        pub share: f64,
        pub members: Vec<GroupMemberView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupMemberView {
        pub id: Uuid,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupsResponse {
        pub groups: Vec<GroupView>,
    }
}

pub mod items {
    use super::*;

    /// Request body for a new item. The owner comes from the path.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemNew {
        pub item_name: String,
        pub cost: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemView {
        pub id: Uuid,
        pub person_id: Uuid,
        pub item_name: String,
        pub cost: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemsResponse {
        pub items: Vec<ItemView>,
    }
}

pub mod totals {
    use super::*;
    use crate::items::ItemView;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupShareView {
        pub group_name: String,
        pub share: f64,
    }

    /// What a person owes. Amounts are unrounded.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct PersonTotalView {
        pub person_id: Uuid,
        pub name: String,
        pub total: f64,
        pub group_share: f64,
        pub individual_total: f64,
        pub items: Vec<ItemView>,
        pub groups: Vec<GroupShareView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TotalsResponse {
        pub grand_total: f64,
        /// In the order people were added.
        pub people: Vec<PersonTotalView>,
    }
}

pub mod summary {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummaryResponse {
        pub text: String,
        /// `https://wa.me/?text=` followed by the encoded text.
        pub share_url: String,
    }
}

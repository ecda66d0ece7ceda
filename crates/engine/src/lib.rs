//! Bill splitting for a night out.
//!
//! A [`Tab`] holds the people at the table, the groups sharing a cost and the
//! items each person ordered on their own. [`compute_totals`] derives what
//! everyone owes and [`format_summary`] renders it as text to share.
//!
//! ```rust
//! use engine::{Amount, Tab};
//!
//! let mut tab = Tab::new();
//! let alice = tab.add_person("Alice").unwrap();
//! let bob = tab.add_person("Bob").unwrap();
//! tab.add_group("Pizza", Amount::new(20.0), vec![alice, bob]);
//! tab.add_individual_item(bob, "Soda", Amount::new(3.0));
//!
//! let totals = tab.totals();
//! assert_eq!(totals.get(alice).unwrap().total.to_string(), "10.00");
//! assert_eq!(totals.get(bob).unwrap().total.to_string(), "13.00");
//! assert_eq!(totals.grand_total.to_string(), "23.00");
//! ```

pub use drafts::{GroupDraft, ItemDraft, PersonDraft, ValidGroup, ValidItem, ValidPerson};
pub use error::EngineError;
pub use group::Group;
pub use item::IndividualItem;
pub use money::Amount;
pub use ops::{Tab, UNKNOWN_PERSON};
pub use person::Person;
pub use share::{encode_uri_component, whatsapp_link};
pub use summary::format_summary;
pub use totals::{GroupShare, PersonTotal, Totals, compute_totals};

pub mod drafts;
mod error;
mod group;
mod item;
mod money;
mod ops;
mod person;
pub mod share;
mod summary;
mod totals;

type ResultEngine<T> = Result<T, EngineError>;

use crate::{Totals, compute_totals, format_summary, whatsapp_link};

use super::Tab;

impl Tab {
    /// Per-person totals of the current state.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.people, &self.groups, &self.items)
    }

    /// Summary text of the current state.
    pub fn summary(&self) -> String {
        let totals = self.totals();
        format_summary(&self.people, &self.groups, &totals, totals.grand_total)
    }

    /// WhatsApp link carrying [`Tab::summary`].
    pub fn share_link(&self) -> String {
        whatsapp_link(&self.summary())
    }
}

//! Text summary of a tab, ready to be pasted in a chat.
//!
//! The layout (Spanish labels, `*bold*` markers, `$` prefix) is what the
//! sharing target has always received, so it is reproduced byte for byte.

use crate::{Amount, Group, Person, Totals};

const TITLE: &str = "*Resumen de Gastos del Cumpleaños* 🎂";
const RULER: &str = "----------------------------------";

/// Renders the summary.
///
/// Sections whose collection is empty are left out: no groups section without
/// groups, no individual lines for a person without items.
pub fn format_summary(
    people: &[Person],
    groups: &[Group],
    totals: &Totals,
    grand_total: Amount,
) -> String {
    let mut out = format!("{TITLE}\n\n*TOTAL GENERAL: ${grand_total}*\n{RULER}\n\n");

    if !groups.is_empty() {
        out.push_str("*CONSUMOS GRUPALES*\n");
        for group in groups {
            out.push_str(&format!("*- {} (${})*\n", group.name, group.total_cost));
            out.push_str(&format!("  Cada uno: ${}\n", group.share()));
        }
        out.push('\n');
    }

    out.push_str("*TOTAL A PAGAR POR PERSONA*\n");
    for person in people {
        let Some(entry) = totals.get(person.id) else {
            continue;
        };
        out.push_str(&format!("*{}: ${}*\n", person.name, entry.total));
        if !entry.group_breakdown.is_empty() {
            out.push_str(&format!("  Grupos: ${}\n", entry.group_share));
        }
        if !entry.items.is_empty() {
            out.push_str(&format!("  Individual: ${}\n", entry.individual_total));
            for item in &entry.items {
                out.push_str(&format!("    - {}: ${}\n", item.item_name, item.cost));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_totals;

    #[test]
    fn empty_tab_has_header_and_people_section_only() {
        let totals = compute_totals(&[], &[], &[]);
        let text = format_summary(&[], &[], &totals, totals.grand_total);

        assert_eq!(
            text,
            "*Resumen de Gastos del Cumpleaños* 🎂\n\n\
             *TOTAL GENERAL: $0.00*\n\
             ----------------------------------\n\n\
             *TOTAL A PAGAR POR PERSONA*\n"
        );
    }

    #[test]
    fn people_missing_from_totals_are_skipped() {
        let people = vec![Person::new("Ghost".to_string())];
        let totals = compute_totals(&[], &[], &[]);
        let text = format_summary(&people, &[], &totals, totals.grand_total);

        assert!(!text.contains("Ghost"));
    }

    #[test]
    fn empty_group_shows_zero_share() {
        let groups = vec![Group::new("Hielo".to_string(), Amount::new(5.0), Vec::new())];
        let totals = compute_totals(&[], &groups, &[]);
        let text = format_summary(&[], &groups, &totals, totals.grand_total);

        assert!(text.contains("*- Hielo ($5.00)*\n  Cada uno: $0.00\n"));
    }
}

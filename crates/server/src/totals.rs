//! Totals and summary endpoints. Both are recomputed on every request.

use api_types::{
    summary::SummaryResponse,
    totals::{GroupShareView, PersonTotalView, TotalsResponse},
};
use axum::{Json, extract::State};

use crate::{items::item_view, server::ServerState};

pub async fn get_totals(State(state): State<ServerState>) -> Json<TotalsResponse> {
    let tab = state.tab.read().await;
    let totals = tab.totals();

    let people = tab
        .people()
        .iter()
        .filter_map(|person| {
            let entry = totals.get(person.id)?;
            Some(PersonTotalView {
                person_id: person.id,
                name: person.name.clone(),
                total: entry.total.value(),
                group_share: entry.group_share.value(),
                individual_total: entry.individual_total.value(),
                items: entry.items.iter().map(item_view).collect(),
                groups: entry
                    .group_breakdown
                    .iter()
                    .map(|g| GroupShareView {
                        group_name: g.group_name.clone(),
                        share: g.share.value(),
                    })
                    .collect(),
            })
        })
        .collect();

    Json(TotalsResponse {
        grand_total: totals.grand_total.value(),
        people,
    })
}

pub async fn get_summary(State(state): State<ServerState>) -> Json<SummaryResponse> {
    let tab = state.tab.read().await;
    let text = tab.summary();
    let share_url = engine::whatsapp_link(&text);

    Json(SummaryResponse { text, share_url })
}

//! Individual items API endpoints.

use api_types::{
    Created,
    items::{ItemNew, ItemView, ItemsResponse},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{Amount, IndividualItem, ItemDraft};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub(crate) fn item_view(item: &IndividualItem) -> ItemView {
    ItemView {
        id: item.id,
        person_id: item.person_id,
        item_name: item.item_name.clone(),
        cost: item.cost.value(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Json<ItemsResponse> {
    let tab = state.tab.read().await;
    let items = tab.items().iter().map(item_view).collect();
    Json(ItemsResponse { items })
}

/// Adds an item to the person in the path.
///
/// The person is not looked up, matching the tab: an item for an unknown
/// person only counts towards the grand total.
pub async fn item_new(
    State(state): State<ServerState>,
    Path(person_id): Path<Uuid>,
    payload: Result<Json<ItemNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let Json(payload) = payload?;
    let draft = ItemDraft {
        item_name: payload.item_name,
        cost: Amount::new(payload.cost),
    };

    let mut tab = state.tab.write().await;
    if tab.person(person_id).is_none() {
        tracing::warn!(%person_id, "adding item for unknown person");
    }
    let id = tab.submit_item(person_id, &draft)?;
    tracing::info!(%id, %person_id, "item added");

    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn remove(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    state.tab.write().await.remove_individual_item(id);
    StatusCode::NO_CONTENT
}

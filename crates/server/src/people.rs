//! People API endpoints.

use api_types::{
    Created,
    people::{PeopleResponse, PersonNew, PersonView},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::PersonDraft;
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Json<PeopleResponse> {
    let tab = state.tab.read().await;
    let people = tab
        .people()
        .iter()
        .map(|person| PersonView {
            id: person.id,
            name: person.name.clone(),
        })
        .collect();

    Json(PeopleResponse { people })
}

pub async fn person_new(
    State(state): State<ServerState>,
    payload: Result<Json<PersonNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let Json(payload) = payload?;
    let mut tab = state.tab.write().await;
    let id = tab.submit_person(&PersonDraft { name: payload.name })?;
    tracing::info!(%id, "person added");

    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// Removes a person, its items and its group memberships.
pub async fn remove(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    state.tab.write().await.remove_person(id);
    StatusCode::NO_CONTENT
}

//! Groups API endpoints.

use api_types::{
    Created,
    groups::{GroupMemberView, GroupNew, GroupView, GroupsResponse},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{Amount, GroupDraft};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Json<GroupsResponse> {
    let tab = state.tab.read().await;
    let groups = tab
        .groups()
        .iter()
        .map(|group| GroupView {
            id: group.id,
            name: group.name.clone(),
            total_cost: group.total_cost.value(),
            share: group.share().value(),
            members: group
                .members
                .iter()
                .zip(tab.member_names(group))
                .map(|(id, name)| GroupMemberView { id: *id, name })
                .collect(),
        })
        .collect();

    Json(GroupsResponse { groups })
}

pub async fn group_new(
    State(state): State<ServerState>,
    payload: Result<Json<GroupNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let Json(payload) = payload?;
    let draft = GroupDraft {
        name: payload.name,
        total_cost: Amount::new(payload.total_cost),
        members: payload.members,
    };

    let mut tab = state.tab.write().await;
    let id = tab.submit_group(&draft)?;
    tracing::info!(%id, members = draft.members.len(), "group added");

    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn remove(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    state.tab.write().await.remove_group(id);
    StatusCode::NO_CONTENT
}

use axum::{
    Router,
    routing::{delete, get, post},
};
use tokio::sync::RwLock;

use std::sync::Arc;

use crate::{groups, items, people, totals};
use engine::Tab;

/// Shared state of the service: a single tab.
///
/// Every handler takes the lock once, so a request sees and leaves the tab in
/// a consistent state.
#[derive(Clone)]
pub struct ServerState {
    pub tab: Arc<RwLock<Tab>>,
}

impl ServerState {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab: Arc::new(RwLock::new(tab)),
        }
    }
}

/// Builds the router serving `tab`.
pub fn app(tab: Tab) -> Router {
    router(ServerState::new(tab))
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/people", get(people::list).post(people::person_new))
        .route("/people/{id}", delete(people::remove))
        .route("/people/{id}/items", post(items::item_new))
        .route("/groups", get(groups::list).post(groups::group_new))
        .route("/groups/{id}", delete(groups::remove))
        .route("/items", get(items::list))
        .route("/items/{id}", delete(items::remove))
        .route("/totals", get(totals::get_totals))
        .route("/summary", get(totals::get_summary))
        .with_state(state)
}

pub async fn run_with_listener(
    tab: Tab,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(tab)).await
}

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, app, run_with_listener};

mod groups;
mod items;
mod people;
mod server;
mod totals;

pub enum ServerError {
    Engine(EngineError),
    /// A request body axum could not decode.
    Body(JsonRejection),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidName(_)
        | EngineError::InvalidAmount(_)
        | EngineError::EmptyGroup(_)
        | EngineError::UnknownPerson(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                tracing::debug!("rejected draft: {err}");
                (status_for_engine_error(&err), err.to_string())
            }
            ServerError::Body(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Body(value)
    }
}

mod init;
mod state;
pub mod data_models;
pub mod routes;
pub mod utils;

pub use init::init_router;
pub use state::ServerState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::server::data_models::ErrorDetail;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("File not found")]
    FileNotFound,

    #[error("Task fault: `{0}`")]
    TaskFault(#[from] gofer::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::TaskFault(err) => {
                tracing::error!(error = %err, "request failed on a task fault");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
            ServerError::FileNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorDetail::new("File not found")),
            )
                .into_response(),
        }
    }
}

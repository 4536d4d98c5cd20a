use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::fs;
use std::sync::Arc;

use crate::server::data_models::{FileContentResponse, ReadParams};
use crate::server::state::ServerState;
use crate::server::ServerError;

/// `GET /read?filename=<name>`. Names that escape the storage root are
/// treated exactly like missing files.
pub async fn read_file(
    State(server_state): State<Arc<ServerState>>,
    Query(params): Query<ReadParams>,
) -> Result<(StatusCode, Json<FileContentResponse>), ServerError> {
    let store = server_state.agent.store();
    let path = store
        .resolve_read(&params.filename)
        .ok_or(ServerError::FileNotFound)?;
    let content = fs::read_to_string(&path).map_err(gofer::Error::from)?;

    Ok((StatusCode::OK, Json(FileContentResponse::new(content))))
}

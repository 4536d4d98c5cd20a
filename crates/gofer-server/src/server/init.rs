use axum::extract::MatchedPath;
use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;

use gofer::AgentConfig;

use crate::server::routes::{default, files, tasks};
use crate::server::state::ServerState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub fn init_router(config: &AgentConfig) -> anyhow::Result<Router> {
    let state = Arc::new(ServerState::new(config)?);

    let router = Router::new()
        .route("/", get(default::home))
        .route("/run", post(tasks::run_task))
        .route("/read", get(files::read_file))
        .route("/health", get(default::health_check))
        .with_state(state)
        .layer((
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                // Log the matched route's path (with placeholders not filled in).
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                info_span!(
                    "http_request",
                    method = ?request.method(),
                    matched_path,
                )
            }),
            TimeoutLayer::new(REQUEST_TIMEOUT),
        ));
    Ok(router)
}

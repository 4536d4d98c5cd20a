use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use gofer::TaskReport;

use crate::server::data_models::RunParams;
use crate::server::state::ServerState;
use crate::server::ServerError;

/// `POST /run?task=<name>`. Handled task failures come back as 200 with
/// an error-shaped report; only faults turn into a 500.
pub async fn run_task(
    State(server_state): State<Arc<ServerState>>,
    Query(params): Query<RunParams>,
) -> Result<(StatusCode, Json<TaskReport>), ServerError> {
    let report = server_state.agent.dispatch(&params.task).await?;

    Ok((StatusCode::OK, Json(report)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::fs;
    use tempfile::TempDir;

    use gofer::AgentConfig;

    fn scratch_state() -> anyhow::Result<(TempDir, Arc<ServerState>)> {
        let dir = TempDir::new()?;
        let config = AgentConfig {
            data_dir: dir.path().to_path_buf(),
        };
        let state = ServerState::new(&config).context("Failed to create server state")?;
        Ok((dir, Arc::new(state)))
    }

    async fn run(state: Arc<ServerState>, task: &str) -> Result<TaskReport, ServerError> {
        let params = RunParams {
            task: task.to_string(),
        };
        let (status, Json(report)) = run_task(State(state), Query(params)).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(report)
    }

    #[tokio::test]
    async fn test_unknown_task_is_reported() -> anyhow::Result<()> {
        let (_dir, state) = scratch_state()?;

        let report = run(state, "polish the silverware").await?;
        assert_eq!(report, TaskReport::error("Task not recognized"));

        Ok(())
    }

    #[tokio::test]
    async fn test_known_task_runs_against_the_store() -> anyhow::Result<()> {
        let (_dir, state) = scratch_state()?;
        fs::write(
            state.agent.store().path("dates.txt"),
            "2024-01-03\n2024-01-10\n2024-01-11\n",
        )?;

        let report = run(state, "count Wednesdays").await?;
        assert_eq!(report, TaskReport::count(2));
        assert_eq!(
            serde_json::to_string(&report)?,
            r#"{"status":"success","count":2}"#
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_task_fault_surfaces_as_error() -> anyhow::Result<()> {
        let (_dir, state) = scratch_state()?;
        fs::write(state.agent.store().path("contacts.json"), "{not json")?;

        let result = run(state, "sort contacts").await;
        assert!(matches!(result, Err(ServerError::TaskFault(_))));

        Ok(())
    }
}

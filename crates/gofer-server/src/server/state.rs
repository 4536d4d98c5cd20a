use gofer::{AgentConfig, DataStore, Result, TaskAgent};

/// Represents the state of the server.
#[derive(Clone)]
pub struct ServerState {
    pub agent: TaskAgent,
}

impl ServerState {
    /// Opens the storage root (creating it if absent) and wires the task
    /// agent over it.
    pub fn new(config: &AgentConfig) -> Result<Self> {
        let store = DataStore::open(config)?;
        tracing::info!(data_dir = %store.root().display(), "storage root ready");

        Ok(Self {
            agent: TaskAgent::new(store),
        })
    }
}

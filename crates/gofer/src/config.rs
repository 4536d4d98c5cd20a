//! Runtime configuration, built once at startup and passed down explicitly.

use std::path::PathBuf;

use crate::{Error, Result};

/// Configuration for a task agent.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Base directory for all task input and output files.
    pub data_dir: PathBuf,
}

impl AgentConfig {
    /// Build a config from an optional explicit storage root, falling back
    /// to [`default_data_dir`].
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Self { data_dir })
    }
}

/// The storage root used when nothing else is configured: `~/Desktop/data`.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::HomeDirUnavailable)?;
    Ok(home.join("Desktop").join("data"))
}

//! Storage root access.
//!
//! Every task reads and writes flat files directly under one configured
//! base directory. [`DataStore`] owns that path: it creates the directory
//! on startup, joins the fixed per-task file names, and resolves
//! caller-supplied names for the read endpoint without letting them escape
//! the root.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::AgentConfig;
use crate::Result;

/// Handle on the storage root.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    /// Open the storage root, creating it if absent.
    pub fn open(config: &AgentConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;
        Ok(Self {
            root: config.data_dir.clone(),
        })
    }

    /// The storage root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a well-known file name under the root. The name is
    /// trusted; use [`DataStore::resolve_read`] for caller-supplied names.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Resolve a caller-supplied file name for reading.
    ///
    /// Absolute names and names containing a `..` component are treated
    /// the same as missing files, so a request can never reach outside the
    /// storage root. Returns the full path only if it exists as a file.
    pub fn resolve_read(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        if relative.is_absolute() {
            return None;
        }
        if relative
            .components()
            .any(|component| matches!(component, Component::ParentDir))
        {
            return None;
        }
        let path = self.root.join(relative);
        path.is_file().then_some(path)
    }
}

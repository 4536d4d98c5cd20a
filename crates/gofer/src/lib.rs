#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod store;
pub mod tasks;

pub use config::AgentConfig;
pub use error::{Error, Result};
pub use store::DataStore;
pub use tasks::{TaskAgent, TaskKind, TaskReport, TaskStatus};

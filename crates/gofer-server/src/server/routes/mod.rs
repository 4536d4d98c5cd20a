pub mod default;
pub mod files;
pub mod tasks;

use gofer::TaskStatus;
use serde::{Deserialize, Serialize};

/// Query parameters of `POST /run`.
#[derive(Debug, Deserialize, Clone)]
pub struct RunParams {
    pub task: String,
}

/// Query parameters of `GET /read`.
#[derive(Debug, Deserialize, Clone)]
pub struct ReadParams {
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful `GET /read`.
#[derive(Debug, Serialize)]
pub struct FileContentResponse {
    pub status: TaskStatus,
    pub content: String,
}

impl FileContentResponse {
    pub fn new(content: String) -> Self {
        Self {
            status: TaskStatus::Success,
            content,
        }
    }
}

/// Error body carried by non-2xx JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

use axum::http::StatusCode;
use axum::Json;

use crate::server::data_models::MessageResponse;

pub async fn home() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse::new("Welcome to the Automation Agent API")),
    )
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_home_greets() {
        let (status, Json(body)) = home().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Welcome to the Automation Agent API");
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, StatusCode::OK);
    }
}

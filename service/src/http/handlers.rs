use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Body returned by the greeting handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootMessage {
    pub message: String,
}

// health check handler
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Greeting handler. Callable directly; not present in the route table.
pub async fn read_root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Hello World!".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn read_root_returns_the_greeting() {
        let Json(body) = read_root().await;

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"message": "Hello World!"})
        );
    }

    #[tokio::test]
    async fn health_check_is_ok() {
        assert_eq!(health_check().await, StatusCode::OK);
    }
}

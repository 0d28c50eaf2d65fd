//! Root greeting endpoint.

use axum::Json;
use serde::Serialize;

use crate::config::{GREETING_MESSAGE, GREETING_STATUS, GREETING_VERSION};

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

impl GreetingResponse {
    pub const fn current() -> Self {
        Self {
            message: GREETING_MESSAGE,
            status: GREETING_STATUS,
            version: GREETING_VERSION,
        }
    }
}

/// Greeting handler. Query string and body are ignored.
pub async fn index() -> Json<GreetingResponse> {
    Json(GreetingResponse::current())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greeting_payload() {
        let Json(body) = index().await;
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"message":"Hello from Python App!","status":"running","version":"1.0.0"}"#
        );
    }
}

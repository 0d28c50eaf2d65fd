//! Health check endpoint for container orchestration.
//!
//! Liveness probe: returns 200 with a fixed JSON body whenever the process
//! can answer HTTP. Used by Kubernetes, systemd, and load balancers.

use axum::Json;
use serde::Serialize;

use crate::config::{HEALTH_STATUS, SERVICE_NAME};

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub const fn healthy() -> Self {
        Self {
            status: HEALTH_STATUS,
            service: SERVICE_NAME,
        }
    }
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_payload() {
        let Json(body) = health().await;
        assert_eq!(body, HealthResponse::healthy());
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"healthy","service":"python-app"}"#
        );
    }
}

//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns a fixed JSON payload when the
//! process is running. Used by Kubernetes, Cloud Run, and load balancers to
//! verify the service is able to accept traffic.

use axum::Json;
use serde::Serialize;

/// Health status payload.
///
/// Carries a single `status` field that is always `"healthy"`. Constructed
/// fresh for every request and discarded after serialization.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

impl HealthStatus {
    fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

/// Health check handler.
///
/// Returns `200 OK` with the JSON body `{"status":"healthy"}`. The request
/// is not inspected; any number of concurrent invocations produce identical
/// output.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_serializes_to_contract_bytes() {
        let json = serde_json::to_string(&HealthStatus::healthy()).unwrap();
        assert_eq!(json, r#"{"status":"healthy"}"#);
    }
}

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// "healthy" while the process serves requests
    pub status: String,
    /// Server time, RFC 3339
    pub timestamp: String,
    pub version: String,
    /// Document store behind the API (`postgres` or `memory`)
    pub store: String,
}

/// Liveness probe for load balancers and container orchestration.
pub struct HealthApi {
    store: &'static str,
}

impl HealthApi {
    pub fn new(store: &'static str) -> Self {
        Self { store }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check
    ///
    /// Public; does not require authentication.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: self.store.to_string(),
        })
    }
}

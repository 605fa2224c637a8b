use serde::Serialize;
use ts_rs::TS;

/// Liveness state reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-status.ts"
)]
pub enum HealthStatus {
    Ok,
}

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

impl HealthResponse {
    /// Response for a process that is serving requests.
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
        }
    }
}

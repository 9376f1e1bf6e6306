//! `GET /health` response body.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
    pub confirmation_queue: CheckStatus,
    pub publisher: CheckStatus,
}

impl HealthChecks {
    pub fn all_ok(&self) -> bool {
        [&self.database, &self.confirmation_queue, &self.publisher]
            .iter()
            .all(|check| check.status == ComponentStatus::Ok)
    }
}

/// Outcome of one component check with a human-readable detail.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: ComponentStatus,
    pub message: String,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: ComponentStatus::Ok,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ComponentStatus::Error,
            message: message.into(),
        }
    }
}

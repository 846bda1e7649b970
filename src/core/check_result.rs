use std::time::Duration;

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Message reported when a rejected response carries no readable error.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Outcome of checking a single credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckResult {
    /// The endpoint answered `200 OK`.
    Valid,

    /// The endpoint answered with any other status.
    Invalid { code: u16, reason: String },

    /// No response was obtained.
    Errored { reason: String },
}

impl CheckResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<CheckError> for CheckResult {
    fn from(e: CheckError) -> Self {
        Self::Errored {
            reason: e.to_string(),
        }
    }
}

/// Failure to obtain any response for a credential.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("unable to build request: {0}")]
    Request(#[from] http::Error),

    /// Connection, DNS, TLS and body read failures reported by the client.
    #[error("{0:#}")]
    Transport(anyhow::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Extracts `error.message` from a JSON error body.
pub fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| UNKNOWN_ERROR.to_string())
}

/// Classifies a completed response.
pub fn classify(status: StatusCode, body: &[u8]) -> CheckResult {
    if status == StatusCode::OK {
        return CheckResult::Valid;
    }

    CheckResult::Invalid {
        code: status.as_u16(),
        reason: error_message(body),
    }
}

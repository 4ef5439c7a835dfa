use std::fmt;

use serde::{Deserialize, Serialize};

/// One failure reported by the hub for one suboperation.
///
/// The wire key for the numeric code is `type`; the rest of the crate calls
/// it `code` to avoid fighting the keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubError {
    #[serde(rename = "type", default)]
    pub code: i32,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hue error {}: {} {}",
            self.code, self.address, self.description
        )
    }
}

/// Multiple hub failures from one response, in the order the hub reported
/// them. A PUT that changes several fields can fail several ways at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateError(pub Vec<HubError>);

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", rendered.join("; "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Api(HubError),

    #[error("{0}")]
    Aggregate(AggregateError),

    #[error("Press the link button on the hub, then run 'huectl register' again")]
    LinkButtonNotPressed,

    #[error("HTTP request failed: status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Failed to parse response body: {body}")]
    MalformedResponse {
        body: String,
        source: serde_json::Error,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("{failed} of {total} light updates failed")]
    PartialFailure { failed: usize, total: usize },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::LinkButtonNotPressed => 2,
            AppError::Api(_) | AppError::Aggregate(_) => 3,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Api(_) => "api",
            AppError::Aggregate(_) => "aggregate",
            AppError::LinkButtonNotPressed => "link_button_not_pressed",
            AppError::Status { .. } => "status",
            AppError::MalformedResponse { .. } => "malformed_response",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::PartialFailure { .. } => "partial_failure",
            AppError::Http(_) => "http",
            AppError::Json(_) => "json",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        });
        if let Some(code) = self.hub_error_code() {
            obj["error_code"] = serde_json::json!(code);
        }
        obj
    }

    fn hub_error_code(&self) -> Option<i32> {
        match self {
            AppError::Api(err) => Some(err.code),
            AppError::Aggregate(errs) => errs.0.first().map(|e| e.code),
            _ => None,
        }
    }
}

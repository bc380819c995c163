use std::fmt;

use serde::Deserialize;
use summarizer_core::{RequestId, SummaryResult};
use thiserror::Error;

/// JSON body of a successful `/summarize` exchange.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryResponse {
    pub mode: String,
    pub summary: String,
}

impl From<SummaryResponse> for SummaryResult {
    fn from(response: SummaryResponse) -> Self {
        SummaryResult {
            mode: response.mode,
            summary: response.summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmitCompleted {
        request_id: RequestId,
        result: Result<SummaryResponse, SubmitError>,
    },
}

/// Failure of a summarize exchange. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmitError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}

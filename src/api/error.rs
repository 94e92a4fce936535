//! Word service errors

use crate::game::evaluate::EvaluateError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: HTTP {status} - {body}")]
    Server { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Evaluation failed: {0}")]
    Evaluate(#[from] EvaluateError),
}

impl ApiError {
    /// True when the service could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        match self {
            ApiError::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

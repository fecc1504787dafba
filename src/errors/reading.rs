use axum::http::StatusCode;

/// Client-caused ingestion failures. These are never retried server-side; the
/// device resends on its own poll cycle.
#[derive(Debug, thiserror::Error)]
pub enum ReadingError {
    #[error("Invalid data format: {0}")]
    MalformedBody(String),

    #[error("Invalid relay value '{0}': expected 'ON' or 'OFF'")]
    InvalidRelayValue(String),
}

impl ReadingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReadingError::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ReadingError::InvalidRelayValue(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

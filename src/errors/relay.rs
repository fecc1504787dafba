use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Command must be 'ON' or 'OFF', got '{0}'")]
    InvalidCommand(String),

    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidCommand(_) => StatusCode::BAD_REQUEST,
            RelayError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("No terminal status after {0} checks")]
    PollTimeout(u32),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Network, DNS, TLS, timeout, or request construction failure.
    #[error("transport: {0}")]
    Transport(String),

    /// The request was abandoned through the client's cancellation flag.
    #[error("request cancelled")]
    Cancelled,

    /// Non-200 HTTP status, or an API-level error payload.
    #[error("remote error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Remote { status: Option<u16>, message: String },

    #[error("decode: {0}")]
    Decode(String),
}

impl Error {
    /// Cancellation is a user-initiated outcome rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

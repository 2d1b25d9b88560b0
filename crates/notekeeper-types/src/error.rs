use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum NotesError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for NotesError {
    fn from(e: serde_json::Error) -> Self {
        NotesError::Serialization(e.to_string())
    }
}

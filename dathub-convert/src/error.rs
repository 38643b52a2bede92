/// Errors raised around the adapters: reading and writing serialized models.
///
/// The adapters themselves never fail; missing or ill-typed data is dropped
/// or coerced instead.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ConvertError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

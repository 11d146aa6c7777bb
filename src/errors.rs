use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResumeError {
    /// Caller input broke a precondition; never reaches the store.
    #[error("{0}")]
    Validation(String),

    /// The store reported a failure. The message is passed through verbatim.
    #[error("{0}")]
    Store(String),

    #[error("Failed to convert record: {0}")]
    Codec(String),

    #[error("{0}")]
    Config(String),

    #[error("Failed to parse request: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ResumeError {
    fn from(error: serde_json::Error) -> Self {
        ResumeError::Codec(error.to_string())
    }
}

// Generic implementation for DynamoDB SDK errors
impl<E, R> From<SdkError<E, R>> for ResumeError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        let message = match error.message() {
            Some(msg) => msg.to_string(),
            None => aws_sdk_dynamodb::error::DisplayErrorContext(&error).to_string(),
        };
        ResumeError::Store(message)
    }
}

use crate::errors::client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

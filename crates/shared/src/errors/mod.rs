mod client;
mod error;
mod service;

pub use self::client::ClientError;
pub use self::error::ErrorResponse;
pub use self::service::ServiceError;

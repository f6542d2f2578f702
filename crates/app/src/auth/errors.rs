//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthServiceError {
    #[error("shared secret must not be empty")]
    EmptySecret,

    #[error("invalid API token")]
    InvalidToken,
}

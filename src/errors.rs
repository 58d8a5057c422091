// errors.rs

use crate::domain::VariantParseError;
use thiserror::Error;

/// Errors raised while routing and rendering a request.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

impl From<VariantParseError> for ServerError {
    fn from(err: VariantParseError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}

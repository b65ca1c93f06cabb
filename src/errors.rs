use thiserror::Error;

#[derive(Debug, Error)]
pub enum SameError {
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("schema error: {0}")]
    SchemaError(String),
    #[error("query error: {0}")]
    QueryError(String),
    #[error("element not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("decode error: {0}")]
    DecodeError(String),
}

impl SameError {
    pub fn connection<T: Into<String>>(msg: T) -> Self {
        SameError::ConnectionError(msg.into())
    }

    pub fn schema<T: Into<String>>(msg: T) -> Self {
        SameError::SchemaError(msg.into())
    }

    pub fn query<T: Into<String>>(msg: T) -> Self {
        SameError::QueryError(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SameError::NotFound(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        SameError::InvalidInput(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        SameError::DecodeError(msg.into())
    }
}

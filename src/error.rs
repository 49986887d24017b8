use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::models::{GraphQLRequest, GraphQLResponse};

#[derive(Error, Debug)]
pub enum LinearError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type LinearResult<T> = Result<T, LinearError>;

/// The server answered, but not with usable data.
///
/// Carries the parsed body (with the HTTP status merged in) and the request
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientError {
    pub response: GraphQLResponse,
    pub request: GraphQLRequest,
}

impl ClientError {
    pub fn new(response: GraphQLResponse, request: GraphQLRequest) -> Self {
        Self { response, request }
    }

    /// First GraphQL error message, or a generic one naming the status code.
    pub fn message(&self) -> String {
        match self.response.first_error_message() {
            Some(message) => message.to_string(),
            None => format!("GraphQL Error (Code: {})", self.response.status),
        }
    }

    pub fn status(&self) -> u16 {
        self.response.status
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dump = serde_json::to_string(self).unwrap_or_default();
        write!(f, "{}: {}", self.message(), dump)
    }
}

impl std::error::Error for ClientError {}

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> LinearResult<T>;
    fn with_context<F>(self, f: F) -> LinearResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> LinearResult<T> {
        self.map_err(|e| LinearError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> LinearResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LinearError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> LinearResult<T> {
        self.ok_or_else(|| LinearError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> LinearResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| LinearError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! linear_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::LinearError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::LinearError::$error_type(format!($fmt, $($arg)*))
    };
}

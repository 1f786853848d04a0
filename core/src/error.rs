//! Error types for the CallFire API client.
//!
//! # Design
//! Failures fall into two families. `ClientError` covers everything raised
//! before or instead of a network exchange: missing required fields, bad
//! templates, unregistered response types, transport failures and bodies that
//! cannot be (de)serialized. `ApiError` is raised only after the server
//! answered with a non-2xx status and carries the parsed `ErrorMessage`.
//! Both surface through the crate-wide `Error`.

use std::fmt;

use crate::api::common::ErrorMessage;
use crate::model_type::{ResourceKind, Shape};

/// Help page used when the server does not provide one.
pub const GENERIC_HELP_LINK: &str = "https://answers.callfire.com/hc/en-us";

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, Error>;

/// Any error returned by the client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn is_client(&self) -> bool {
        matches!(self, Error::Client(_))
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    /// HTTP status of an API error, `None` for client-side errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => Some(e.status()),
            Error::Client(_) => None,
        }
    }

    pub fn as_client(&self) -> Option<&ClientError> {
        match self {
            Error::Client(e) => Some(e),
            Error::Api(_) => None,
        }
    }

    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            Error::Client(_) => None,
        }
    }
}

/// Errors that originate in the client, never on the remote service.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// A required identifier or field was not set.
    #[error("{0} cannot be null")]
    MissingField(String),

    /// A required string identifier was empty.
    #[error("{0} cannot be blank")]
    BlankField(String),

    #[error("path template {0:?} does not contain a placeholder")]
    InvalidPathTemplate(String),

    #[error("no response type registered for {kind} as {shape}")]
    UnregisteredType { kind: ResourceKind, shape: Shape },

    /// Connection, TLS or I/O failure reported by the transport.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    #[error("cannot serialize request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("cannot deserialize response body: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub(crate) fn missing(name: &str) -> Self {
        ClientError::MissingField(name.to_string())
    }

    pub(crate) fn transport(e: impl Into<BoxError>) -> Self {
        ClientError::Transport(e.into())
    }
}

/// The server answered with a non-2xx status.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct ApiError {
    status: u16,
    error_message: ErrorMessage,
}

impl ApiError {
    pub fn new(status: u16, error_message: ErrorMessage) -> Self {
        Self {
            status,
            error_message,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Human readable message from the error payload, empty if none was sent.
    pub fn message(&self) -> &str {
        self.error_message.message.as_deref().unwrap_or_default()
    }

    pub fn help_link(&self) -> &str {
        self.error_message
            .help_link
            .as_deref()
            .unwrap_or(GENERIC_HELP_LINK)
    }

    pub fn error_message(&self) -> &ErrorMessage {
        &self.error_message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api error, status {}: {}", self.status, self.message())
    }
}

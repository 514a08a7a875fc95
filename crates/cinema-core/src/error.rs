//! Application-wide error type.
//!
//! Every fallible operation in the workspace returns [`AppError`], carrying
//! a coarse [`ErrorKind`] that the HTTP layer maps onto status codes. Lower
//! layers attach their native errors as the cause chain instead of
//! stringifying them.

use std::fmt;

use thiserror::Error;

/// Coarse error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Request input failed a business or format check.
    Validation,
    /// The caller could not be authenticated (e.g. webhook signature).
    Authentication,
    /// The addressed resource does not exist.
    NotFound,
    /// The write collides with existing state (duplicate title, sold seat).
    Conflict,
    /// A query or transaction failed.
    Database,
    /// Poster filesystem I/O failed.
    Storage,
    /// The payment provider rejected or failed a call.
    ExternalService,
    /// Encoding or decoding a payload failed.
    Serialization,
    /// The application is misconfigured.
    Configuration,
    /// Anything that has no better category.
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::Authentication => "AUTHENTICATION",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Database => "DATABASE",
            Self::Storage => "STORAGE",
            Self::ExternalService => "EXTERNAL_SERVICE",
            Self::Serialization => "SERIALIZATION",
            Self::Configuration => "CONFIGURATION",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one error type crossing crate boundaries.
///
/// `message` is written for humans and may be surfaced to API clients;
/// `source` preserves the underlying error for logs.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Error category, drives the HTTP status.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Underlying cause, when one exists.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

macro_rules! kind_constructors {
    ($($name:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("Build a `", stringify!($kind), "` error from a message.")]
            pub fn $name(message: impl Into<String>) -> Self {
                Self::new(ErrorKind::$kind, message)
            }
        )*
    };
}

impl AppError {
    /// Build an error without an underlying cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Build an error wrapping an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    kind_constructors! {
        validation => Validation,
        authentication => Authentication,
        not_found => NotFound,
        conflict => Conflict,
        database => Database,
        external_service => ExternalService,
        configuration => Configuration,
        internal => Internal,
    }
}

// The boxed cause is not cloneable; clones keep only kind and message.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Serialization, "JSON encoding failed", err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O failed: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration invalid: {err}"),
            err,
        )
    }
}

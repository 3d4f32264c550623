//! Unified error types for supportinfo.
//!
//! One top-level error enum with kind enums per subsystem, so callers can
//! match on the failing stage while the kinds keep the underlying causes.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SupportInfoError>;

/// Main error type for supportinfo operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SupportInfoError {
    /// Errors while parsing the support metadata document
    #[error("failed to parse support metadata: {context}")]
    Metadata {
        context: String,
        #[source]
        source: MetadataErrorKind,
    },

    /// Errors while querying the host package database
    #[error("package database query failed: {context}")]
    Database {
        context: String,
        #[source]
        source: DatabaseErrorKind,
    },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Rejected `--show` filter value
    #[error("unknown statement filter: {0}")]
    UnknownFilter(String),
}

/// Specific metadata parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MetadataErrorKind {
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    #[error("missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    #[error("invalid attribute value: {0}")]
    InvalidAttribute(String),
}

/// Specific package database error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DatabaseErrorKind {
    #[error("failed to launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("query output was not valid UTF-8")]
    InvalidOutput,
}

impl SupportInfoError {
    /// Wrap a metadata error kind with context.
    pub fn metadata(context: impl Into<String>, source: MetadataErrorKind) -> Self {
        Self::Metadata {
            context: context.into(),
            source,
        }
    }

    /// Wrap a database error kind with context.
    pub fn database(context: impl Into<String>, source: DatabaseErrorKind) -> Self {
        Self::Database {
            context: context.into(),
            source,
        }
    }

    /// Wrap an IO error with an optional path.
    pub fn io(path: Option<PathBuf>, message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path,
            message: message.into(),
            source,
        }
    }
}

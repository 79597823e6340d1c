// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Settings error: {0}")]
    SettingsError(String),
    #[error("Document error: {0}")]
    DocumentError(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Why a save call did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveMemoError {
    /// Connection, TLS or HTTP status failure
    #[error("{0}")]
    Transport(String),
    /// The remote answered with a code other than 200
    #[error("{0}")]
    Rejected(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

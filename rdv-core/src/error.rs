//! Error types for the rdv ecosystem.

use thiserror::Error;

/// Errors that can occur in rdv operations.
///
/// Flow-level variants (`Validation`, `AuthRequired`, `Remote`) carry the
/// user-facing message directly; the remaining variants cover the session,
/// config and transport machinery.
#[derive(Error, Debug)]
pub enum RdvError {
    /// Client-side form validation failed; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// A privileged operation was attempted without a stored credential.
    #[error("Vous devez être connecté pour créer un événement")]
    AuthRequired,

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// Network or response-parse failure; a single attempt, no retry.
    #[error("Erreur réseau: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for rdv operations.
pub type RdvResult<T> = Result<T, RdvError>;

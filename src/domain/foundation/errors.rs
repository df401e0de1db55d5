//! Error types shared across the domain boundary.
//!
//! Storage-native failures are translated into [`RepositoryError`] at the
//! adapter boundary, so use cases never depend on storage-engine error types.
//! Upstream service failures carry their HTTP status in
//! [`ExternalServiceError`].

use thiserror::Error;

/// Failures surfaced by repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A unique-constraint violation (cpf, external id).
    #[error("Chave duplicada encontrada")]
    DuplicateKey,

    /// The requested record does not exist.
    #[error("Registro não encontrado")]
    RecordNotFound,

    /// Any other storage failure, with its cause flattened to text.
    #[error("Erro no repositório: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn backend(message: impl Into<String>) -> Self {
        RepositoryError::Backend(message.into())
    }
}

/// A failed call to an external collaborator, carrying the upstream status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (status code: {status_code})")]
pub struct ExternalServiceError {
    pub message: String,
    pub status_code: u16,
}

impl ExternalServiceError {
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }
}

//! Shared error model for record-level failures.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised while building or registering records.
///
/// Order-lifecycle outcomes (empty queues, unreachable locations, undo
/// failures) live in `wareflow-fulfillment::FulfillmentError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation, e.g. an empty name.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Text that should have been an id.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The key is already taken.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Duplicate-key conflict for any entity.
    pub fn duplicate<E: crate::Entity>(kind: &str, entity: &E) -> Self {
        Self::Conflict(format!("{kind} {} already exists", entity.id()))
    }
}

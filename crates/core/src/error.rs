use crate::types::EntityId;

/// Domain-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    /// Input failed domain validation. Recoverable by fixing the input.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with the entity's current state.
    #[error("{0}")]
    Conflict(String),
}

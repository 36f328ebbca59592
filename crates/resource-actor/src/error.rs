//! # Framework Errors
//!
//! Failures of the messaging machinery itself, kept separate from the
//! entities' domain errors. Domain failures travel inside
//! [`FrameworkError::EntityError`] and are downcast by the owning client.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the entity's own error type from an `EntityError`, if that is
    /// what this is. Lets domain clients surface their error enum instead of
    /// a stringified wrapper.
    pub fn into_entity_error<E: std::error::Error + 'static>(self) -> Result<E, FrameworkError> {
        match self {
            FrameworkError::EntityError(boxed) => boxed
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

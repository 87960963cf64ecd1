//! # Framework Errors
//!
//! Common error types shared by every actor and client. Entity-specific
//! failures travel boxed inside [`FrameworkError::EntityError`] and can be
//! recovered with [`FrameworkError::into_entity`].

use std::error::Error;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A new entity collided with an existing one (see [`ActorEntity::conflicts_with`](crate::ActorEntity::conflicts_with)).
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Every `u32` id has been issued; the actor accepts no more creates.
    #[error("Id space exhausted")]
    IdSpaceExhausted,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Hands the error back unchanged when it is a different variant or
    /// when the boxed error is not an `E`.
    pub fn into_entity<E: Error + 'static>(self) -> Result<E, FrameworkError> {
        match self {
            FrameworkError::EntityError(boxed) => boxed
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

//! Error types for the Order actor.

use actor_framework::FrameworkError;
use thiserror::Error;

use crate::model::OrderStatus;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The produce item named in the order does not exist.
    #[error("Produce does not exist: {0}")]
    ProduceMissing(String),

    /// The produce item cannot cover the order (too little stock, or not for sale).
    #[error("{0}")]
    InsufficientStock(String),

    /// `quantity_kg * price_per_kg` is not a finite number.
    #[error("{0}")]
    TotalOutOfRange(String),

    /// The requested status is not the next step after the current one.
    #[error("Cannot change order status from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .into_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

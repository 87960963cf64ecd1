//! Error types for the Produce actor.

use crate::model::VendorId;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during produce operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProduceError {
    /// The requested produce item was not found.
    #[error("Produce not found: {0}")]
    NotFound(String),

    /// The owning vendor does not exist.
    #[error("Vendor does not exist: {0}")]
    VendorMissing(VendorId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested} kg, available {available} kg")]
    InsufficientStock { requested: f64, available: f64 },

    /// The order total for this quantity does not fit in an `f64`.
    #[error("Order total out of range: {quantity_kg} kg at {price_per_kg} per kg")]
    TotalOutOfRange { quantity_kg: f64, price_per_kg: f64 },

    /// The item is listed as not available for sale.
    #[error("Produce is not available: {0}")]
    Unavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProduceError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProduceError::NotFound(id),
            other => other
                .into_entity::<ProduceError>()
                .unwrap_or_else(|e| ProduceError::ActorCommunicationError(e.to_string())),
        }
    }
}

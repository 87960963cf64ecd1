//! Error types for the Vendor actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during vendor operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VendorError {
    /// The requested vendor was not found.
    #[error("Vendor not found: {0}")]
    NotFound(String),

    /// Another vendor is already registered with this phone number.
    #[error("Phone already registered: {0}")]
    PhoneTaken(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for VendorError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => VendorError::NotFound(id),
            FrameworkError::Conflict(reason) => VendorError::PhoneTaken(reason),
            other => other
                .into_entity::<VendorError>()
                .unwrap_or_else(|e| VendorError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_errors_map_to_vendor_errors() {
        assert_eq!(
            VendorError::from(FrameworkError::NotFound("vendor_4".into())),
            VendorError::NotFound("vendor_4".into())
        );
        assert!(matches!(
            VendorError::from(FrameworkError::Conflict("555-0100".into())),
            VendorError::PhoneTaken(_)
        ));
        assert!(matches!(
            VendorError::from(FrameworkError::ActorClosed),
            VendorError::ActorCommunicationError(_)
        ));
    }
}

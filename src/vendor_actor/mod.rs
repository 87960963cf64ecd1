//! # Vendor Actor
//!
//! Manages vendor registrations. This is the simplest actor in the system:
//! no dependencies (Context = `()`) and no custom actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Vendor`]
//! - [`error`] - [`VendorError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use market_backend::model::VendorCreate;
//! use market_backend::vendor_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = vendor_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_vendor(VendorCreate {
//!             name: "Ada".into(),
//!             market_location: "North Market".into(),
//!             phone: "555-0100".into(),
//!         })
//!         .await?;
//!     assert_eq!(id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::VendorClient;
use crate::model::Vendor;
use actor_framework::ResourceActor;

/// Creates a new Vendor actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Vendor>, VendorClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = VendorClient::new(generic_client);

    (actor, client)
}

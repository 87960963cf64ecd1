//! Produce-specific resource logic, including stock reservation.
//!
//! The produce actor must be started with a [`VendorClient`](crate::clients::VendorClient)
//! as its context so new items can be checked against the vendor store.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProduceClient;
use crate::model::Produce;
use actor_framework::ResourceActor;

/// Creates a new Produce actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Produce>, ProduceClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = ProduceClient::new(generic_client);

    (actor, client)
}

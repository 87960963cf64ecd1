//! Order-specific resource logic and entity implementation.
//!
//! The order actor must be started with a [`ProduceClient`](crate::clients::ProduceClient)
//! as its context; see [`MarketSystem`](crate::lifecycle::MarketSystem) for the wiring.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = OrderClient::new(generic_client);

    (actor, client)
}

//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](actor_framework::ActorClient) for the
//! shared `get` / `list` / `delete` calls and adds the domain-specific ones.

pub mod order_client;
pub mod produce_client;
pub mod vendor_client;

pub use order_client::*;
pub use produce_client::*;
pub use vendor_client::*;

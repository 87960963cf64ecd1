//! # Actor Framework
//!
//! Building blocks for type-safe, single-writer resource stores on Tokio. It
//! pairs a **Resource-Oriented** API (standard Create / Get / List / Update /
//! Delete plus custom Actions) with the **Actor Model** (each resource type's
//! state is owned by exactly one task and mutated only by that task).
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain records and their lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop owning the store and id counter
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - cloneable, typed senders
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Stall {
//!     id: u32,
//!     code: String,
//! }
//!
//! #[derive(Debug)]
//! struct StallCreate {
//!     code: String,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("stall error")]
//! struct StallError;
//!
//! #[async_trait]
//! impl ActorEntity for Stall {
//!     type Id = u32;
//!     type Create = StallCreate;
//!     type Update = ();
//!     type Action = ();
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = StallError;
//!
//!     fn from_create_params(id: u32, params: StallCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, code: params.code })
//!     }
//!
//!     fn conflicts_with(&self, existing: &Self) -> Option<String> {
//!         (self.code == existing.code).then(|| format!("code {} taken", self.code))
//!     }
//!
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Stall>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(StallCreate { code: "A1".into() }).await.unwrap();
//!     assert_eq!(id, 1);
//!
//!     let dup = client.create(StallCreate { code: "A1".into() }).await;
//!     assert!(matches!(dup, Err(FrameworkError::Conflict(_))));
//!
//!     // The rejected create did not consume an id.
//!     let next = client.create(StallCreate { code: "B2".into() }).await.unwrap();
//!     assert_eq!(next, 2);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor starts (`actor.run(context)`),
//! not when it is built. A dependent entity sets `type Context` to the
//! clients it needs and uses them from its hooks, e.g. a produce item checking
//! that its vendor exists inside `on_create`.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and processes messages sequentially.
//! - Different actors run in parallel.
//! - No shared mutable state; clients only hold channel senders.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real [`ResourceClient`] from scripted
//! expectations, so an actor can be tested with its dependencies mocked.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

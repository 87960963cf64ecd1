//! # ActorEntity Trait
//!
//! The contract every resource (Vendor, Produce, Order, ...) implements to be
//! managed by the generic [`ResourceActor`](crate::ResourceActor). It names
//! the associated types for ids, payloads, actions, context and errors, and
//! provides lifecycle hooks (`on_create`, `on_update`, `on_delete`,
//! `handle_action`) plus a uniqueness check (`conflicts_with`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::conflicts_with`]
//!
//! The defaults do nothing (`Ok(())` / `None`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await other actors. The `Context`
/// type is injected into every hook when the actor starts running, which lets
/// dependent actors receive the clients they need after construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Built from the actor's `u32` counter; ordered so listings are stable.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `ReserveStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per entity, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// Called synchronously before `conflicts_with` and `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Returns a reason when `self` may not coexist with an already stored entity.
    ///
    /// Checked against every stored entity before `on_create` runs, so a
    /// conflicting create never triggers side effects in other actors.
    fn conflicts_with(&self, _existing: &Self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and passed the conflict check,
    /// right before it is stored. Failing here rejects the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

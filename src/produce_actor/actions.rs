//! Custom actions for the Produce actor.
//!
//! Domain-specific operations on a [`Produce`](crate::model::Produce) entity,
//! handled by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).
//! Because the actor processes one message at a time, each action is atomic
//! with respect to every other request for the same produce store.

/// Custom actions for Produce entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProduceAction {
    /// Takes `quantity_kg` out of stock.
    ///
    /// # Errors
    /// Fails without touching the item when it is not available or holds
    /// less than the requested quantity. On success the updated item is
    /// returned.
    ReserveStock { quantity_kg: f64 },
}

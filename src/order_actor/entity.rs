//! ActorEntity trait implementation for the Order domain type.
//!
//! Orders depend on the produce store: the actor runs with a
//! [`ProduceClient`] as its context. Placing an order reserves stock on the
//! produce item in `on_create`; the produce name and total price are taken
//! from the reserved item. Status changes go through `on_update`.

use crate::clients::ProduceClient;
use crate::model::{Order, OrderCreate, OrderId, OrderStatusUpdate};
use crate::order_actor::OrderError;
use crate::produce_actor::ProduceError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderStatusUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ProduceClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    /// Reserves the ordered quantity and fills in the derived fields.
    ///
    /// Nothing is stored when the reservation fails, and the reservation is
    /// the last fallible step, so a rejected order never takes stock.
    async fn on_create(&mut self, produce: &ProduceClient) -> Result<(), Self::Error> {
        debug!(produce_id = %self.produce_id, quantity_kg = self.quantity_kg, "Reserving stock");
        let item = produce
            .reserve_stock(self.produce_id, self.quantity_kg)
            .await
            .map_err(|e| match e {
                ProduceError::NotFound(id) => OrderError::ProduceMissing(id),
                e @ (ProduceError::InsufficientStock { .. } | ProduceError::Unavailable(_)) => {
                    OrderError::InsufficientStock(e.to_string())
                }
                e @ ProduceError::TotalOutOfRange { .. } => {
                    OrderError::TotalOutOfRange(e.to_string())
                }
                other => OrderError::ActorCommunicationError(other.to_string()),
            })?;

        self.produce_name = item.name;
        self.total_price = self.quantity_kg * item.price_per_kg;
        Ok(())
    }

    /// Moves the order one step forward: pending → confirmed → delivered.
    async fn on_update(
        &mut self,
        update: OrderStatusUpdate,
        _ctx: &ProduceClient,
    ) -> Result<(), Self::Error> {
        if !self.status.can_advance_to(update.status) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: update.status,
            });
        }
        self.set_status(update.status);
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &ProduceClient) -> Result<(), Self::Error> {
        Ok(())
    }
}

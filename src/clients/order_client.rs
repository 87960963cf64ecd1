use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderStatusUpdate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Orchestration (produce lookup, stock reservation) happens in the Order
/// actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order))]
    pub async fn place_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?order, "place_order called");
        info!(produce_id = %order.produce_id, "Sending place_order to actor");
        self.inner.create(order).await.map_err(OrderError::from)
    }

    /// Moves the order to `status`; only the next step in the lifecycle is accepted.
    #[instrument(skip(self))]
    pub async fn advance_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderStatusUpdate { status })
            .await
            .map_err(OrderError::from)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }
}

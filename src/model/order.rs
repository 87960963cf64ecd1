use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{next_timestamp, ProduceId};

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Fulfilment stage of an order. Only moves forward, one step at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Delivered,
}

impl OrderStatus {
    /// The only status this one may advance to, if any.
    pub fn successor(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        self.successor() == Some(next)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Delivered => "delivered",
        };
        f.write_str(name)
    }
}

/// A buyer's purchase of a quantity of one produce item.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderStatusUpdate`])
///
/// `produce_name` and `total_price` are filled in from the produce item when
/// the order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub produce_id: ProduceId,
    pub produce_name: String,
    pub buyer_name: String,
    pub buyer_phone: String,
    pub quantity_kg: f64,
    pub total_price: f64,
    pub delivery_area: String,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for placing an order.
///
/// A missing `produce_id` deserializes as `0`, which no produce ever has.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderCreate {
    pub produce_id: ProduceId,
    pub buyer_name: String,
    pub buyer_phone: String,
    pub quantity_kg: f64,
    pub delivery_area: String,
}

/// Requested status change for an existing order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

impl Order {
    /// Builds a pending order. Produce-derived fields stay empty until
    /// stock has been reserved.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            produce_id: params.produce_id,
            produce_name: String::new(),
            buyer_name: params.buyer_name,
            buyer_phone: params.buyer_phone,
            quantity_kg: params.quantity_kg,
            total_price: 0.0,
            delivery_area: params.delivery_area,
            status: OrderStatus::Pending,
            order_date: now,
            updated_at: now,
        }
    }

    /// Sets the current status and refreshes `updated_at`.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = next_timestamp(self.updated_at);
    }
}

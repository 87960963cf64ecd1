use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{next_timestamp, VendorId};

/// Type-safe identifier for Produce items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProduceId(pub u32);

impl From<u32> for ProduceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProduceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "produce_{}", self.0)
    }
}

/// A sellable item owned by exactly one vendor.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Produce`](#impl-ActorEntity-for-Produce) for details on:
/// - Creation parameters ([`ProduceCreate`], paired with the owning [`VendorId`])
/// - Update parameters ([`ProduceUpdate`])
/// - Custom actions ([`ProduceAction`](crate::produce_actor::ProduceAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produce {
    pub id: ProduceId,
    pub vendor_id: VendorId,
    pub name: String,
    pub quantity_kg: f64,
    pub price_per_kg: f64,
    pub category: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for listing new produce under a vendor.
///
/// `is_available` has no default: a body without it is rejected by the JSON
/// extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProduceCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity_kg: f64,
    #[serde(default)]
    pub price_per_kg: f64,
    #[serde(default)]
    pub category: String,
    pub is_available: bool,
}

/// Partial update: `None` (absent or `null`) leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProduceUpdate {
    pub name: Option<String>,
    pub quantity_kg: Option<f64>,
    pub price_per_kg: Option<f64>,
    pub category: Option<String>,
    pub is_available: Option<bool>,
}

impl Produce {
    pub fn new(id: ProduceId, vendor_id: VendorId, params: ProduceCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            vendor_id,
            name: params.name,
            quantity_kg: params.quantity_kg,
            price_per_kg: params.price_per_kg,
            category: params.category,
            is_available: params.is_available,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies every provided field and refreshes `updated_at`.
    pub fn apply(&mut self, update: ProduceUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity_kg) = update.quantity_kg {
            self.quantity_kg = quantity_kg;
        }
        if let Some(price_per_kg) = update.price_per_kg {
            self.price_per_kg = price_per_kg;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(is_available) = update.is_available {
            self.is_available = is_available;
        }
        self.touch();
    }

    /// Refreshes `updated_at` after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = next_timestamp(self.updated_at);
    }
}

//! ActorEntity trait implementation for the Produce domain type.
//!
//! Produce depends on the vendor store: the actor runs with a
//! [`VendorClient`] as its context and `on_create` refuses items whose
//! vendor is unknown. Stock reservation is a custom action.

use super::actions::ProduceAction;
use crate::clients::VendorClient;
use crate::model::{Produce, ProduceCreate, ProduceId, ProduceUpdate, VendorId};
use crate::produce_actor::ProduceError;
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Produce {
    type Id = ProduceId;
    type Create = (VendorId, ProduceCreate);
    type Update = ProduceUpdate;
    type Action = ProduceAction;
    type ActionResult = Produce;
    type Context = VendorClient;
    type Error = ProduceError;

    fn from_create_params(
        id: ProduceId,
        (vendor_id, params): (VendorId, ProduceCreate),
    ) -> Result<Self, Self::Error> {
        Ok(Self::new(id, vendor_id, params))
    }

    /// Verifies that the owning vendor exists before the item is stored.
    async fn on_create(&mut self, vendors: &VendorClient) -> Result<(), Self::Error> {
        debug!(vendor_id = %self.vendor_id, "Checking vendor");
        match vendors.get(self.vendor_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ProduceError::VendorMissing(self.vendor_id)),
            Err(e) => Err(ProduceError::ActorCommunicationError(e.to_string())),
        }
    }

    /// Handles updates to the Produce entity.
    ///
    /// # Fields Updated
    /// - `name`, `category`
    /// - `quantity_kg`, `price_per_kg`
    /// - `is_available`
    async fn on_update(
        &mut self,
        update: ProduceUpdate,
        _ctx: &VendorClient,
    ) -> Result<(), Self::Error> {
        self.apply(update);
        Ok(())
    }

    /// Handles custom actions for the Produce entity.
    ///
    /// # Actions
    /// - `ReserveStock`: decrements `quantity_kg` if the item is available,
    ///   holds enough and the resulting total price is finite, returning the
    ///   updated item
    async fn handle_action(
        &mut self,
        action: ProduceAction,
        _ctx: &VendorClient,
    ) -> Result<Produce, Self::Error> {
        match action {
            ProduceAction::ReserveStock { quantity_kg } => {
                if !self.is_available {
                    return Err(ProduceError::Unavailable(self.name.clone()));
                }
                if quantity_kg > self.quantity_kg {
                    return Err(ProduceError::InsufficientStock {
                        requested: quantity_kg,
                        available: self.quantity_kg,
                    });
                }
                if !(quantity_kg * self.price_per_kg).is_finite() {
                    return Err(ProduceError::TotalOutOfRange {
                        quantity_kg,
                        price_per_kg: self.price_per_kg,
                    });
                }
                self.quantity_kg -= quantity_kg;
                self.touch();
                Ok(self.clone())
            }
        }
    }
}

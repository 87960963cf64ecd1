//! ActorEntity trait implementation for the Vendor domain type.
//!
//! Vendors have no dependencies and no custom actions. Phone uniqueness is
//! enforced through [`ActorEntity::conflicts_with`], which the actor checks
//! before storing a new vendor.

use crate::model::{Vendor, VendorCreate, VendorId, VendorUpdate};
use crate::vendor_actor::VendorError;
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Vendor {
    type Id = VendorId;
    type Create = VendorCreate;
    type Update = VendorUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = VendorError;

    fn from_create_params(id: VendorId, params: VendorCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    fn conflicts_with(&self, existing: &Self) -> Option<String> {
        (self.phone == existing.phone).then(|| self.phone.clone())
    }

    /// Handles updates to the Vendor entity.
    ///
    /// # Fields Updated
    /// - `name`
    /// - `market_location`
    /// - `phone` (uniqueness is only checked at registration)
    async fn on_update(&mut self, update: VendorUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.apply(update);
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

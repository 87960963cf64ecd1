//! # Produce Client
//!
//! Provides a high-level API for interacting with the `Produce` actor.
//! It wraps a `ResourceClient<Produce>` and exposes domain-specific methods.
use crate::model::{Produce, ProduceCreate, ProduceId, ProduceUpdate, VendorId};
use crate::produce_actor::{ProduceAction, ProduceError};
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Client for interacting with the Produce actor.
#[derive(Clone)]
pub struct ProduceClient {
    inner: ResourceClient<Produce>,
}

impl ProduceClient {
    pub fn new(inner: ResourceClient<Produce>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Produce> for ProduceClient {
    type Error = ProduceError;

    fn inner(&self) -> &ResourceClient<Produce> {
        &self.inner
    }
}

impl ProduceClient {
    /// Lists a new item under `vendor_id`.
    ///
    /// Fails with [`ProduceError::VendorMissing`] if the vendor is unknown.
    #[instrument(skip(self, params))]
    pub async fn add_produce(
        &self,
        vendor_id: VendorId,
        params: ProduceCreate,
    ) -> Result<ProduceId, ProduceError> {
        debug!(?params, "add_produce called");
        self.inner
            .create((vendor_id, params))
            .await
            .map_err(ProduceError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_produce(
        &self,
        id: ProduceId,
        update: ProduceUpdate,
    ) -> Result<Produce, ProduceError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(ProduceError::from)
    }

    /// Reserve `quantity_kg` of stock, returning the item after the decrement.
    #[instrument(skip(self))]
    pub async fn reserve_stock(
        &self,
        id: ProduceId,
        quantity_kg: f64,
    ) -> Result<Produce, ProduceError> {
        debug!("Reserving {} kg of {}", quantity_kg, id);
        self.inner
            .perform_action(id, ProduceAction::ReserveStock { quantity_kg })
            .await
            .map_err(ProduceError::from)
    }

    /// All produce keyed by owning vendor; each list is sorted by produce id.
    #[instrument(skip(self))]
    pub async fn list_grouped(&self) -> Result<BTreeMap<VendorId, Vec<Produce>>, ProduceError> {
        let mut grouped: BTreeMap<VendorId, Vec<Produce>> = BTreeMap::new();
        for item in self.list().await? {
            grouped.entry(item.vendor_id).or_default().push(item);
        }
        Ok(grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;

    fn item(id: u32, vendor: u32, quantity_kg: f64) -> Produce {
        Produce::new(
            ProduceId(id),
            VendorId(vendor),
            ProduceCreate {
                name: format!("item-{id}"),
                quantity_kg,
                price_per_kg: 1.5,
                category: "Fruit".into(),
                is_available: true,
            },
        )
    }

    #[tokio::test]
    async fn list_grouped_buckets_by_vendor() {
        let mut mock = MockClient::<Produce>::new();
        mock.expect_list()
            .return_ok(vec![item(1, 2, 1.0), item(2, 1, 1.0), item(3, 2, 1.0)]);
        let client = ProduceClient::new(mock.client());

        let grouped = client.list_grouped().await.unwrap();

        let vendors: Vec<VendorId> = grouped.keys().copied().collect();
        assert_eq!(vendors, vec![VendorId(1), VendorId(2)]);
        let ids: Vec<ProduceId> = grouped[&VendorId(2)].iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProduceId(1), ProduceId(3)]);
        mock.verify();
    }

    #[tokio::test]
    async fn reserve_stock_surfaces_insufficient_stock() {
        let mut mock = MockClient::<Produce>::new();
        mock.expect_action(ProduceId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                ProduceError::InsufficientStock {
                    requested: 20.0,
                    available: 10.0,
                },
            )));
        let client = ProduceClient::new(mock.client());

        let result = client.reserve_stock(ProduceId(1), 20.0).await;

        assert_eq!(
            result,
            Err(ProduceError::InsufficientStock {
                requested: 20.0,
                available: 10.0
            })
        );
        mock.verify();
    }
}

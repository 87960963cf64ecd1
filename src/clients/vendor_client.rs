use crate::model::{Vendor, VendorCreate, VendorId, VendorUpdate};
use crate::vendor_actor::VendorError;
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Vendor actor.
#[derive(Clone)]
pub struct VendorClient {
    inner: ResourceClient<Vendor>,
}

impl VendorClient {
    pub fn new(inner: ResourceClient<Vendor>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Vendor> for VendorClient {
    type Error = VendorError;

    fn inner(&self) -> &ResourceClient<Vendor> {
        &self.inner
    }
}

impl VendorClient {
    /// Registers a vendor and returns its id.
    ///
    /// Fails with [`VendorError::PhoneTaken`] when the phone is already in use.
    #[instrument(skip(self, params))]
    pub async fn create_vendor(&self, params: VendorCreate) -> Result<VendorId, VendorError> {
        debug!(?params, "create_vendor called");
        self.inner.create(params).await.map_err(VendorError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_vendor(
        &self,
        id: VendorId,
        update: VendorUpdate,
    ) -> Result<Vendor, VendorError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(VendorError::from)
    }
}

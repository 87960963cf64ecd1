//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list` and
//! `delete` built on top of a generic `ResourceClient`, with framework errors
//! converted into the resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct VendorClient {
///     inner: ResourceClient<Vendor>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Vendor> for VendorClient {
///     type Error = VendorError; // implements From<FrameworkError>
///
///     fn inner(&self) -> &ResourceClient<Vendor> {
///         &self.inner
///     }
/// }
///
/// // get(), list() and delete() are now available on VendorClient.
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error {
        Self::Error::from(e)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, sorted by ID.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

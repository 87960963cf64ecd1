use crate::api::AppState;
use crate::clients::{OrderClient, ProduceClient, VendorClient};
use tracing::{error, info};

/// Default mailbox capacity for each actor.
pub const DEFAULT_MAILBOX_SIZE: usize = 32;

/// The runtime orchestrator for the market's actors.
///
/// `MarketSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping all actors
/// - **Dependency Wiring**: produce needs vendors, orders need produce
///
/// # Example
///
/// ```ignore
/// let system = MarketSystem::new(32);
///
/// let vendor_id = system.vendor_client.create_vendor(vendor).await?;
/// let produce_id = system.produce_client.add_produce(vendor_id, produce).await?;
/// let order_id = system.order_client.place_order(order).await?;
///
/// system.shutdown().await?;
/// ```
pub struct MarketSystem {
    /// Client for interacting with the Vendor actor
    pub vendor_client: VendorClient,

    /// Client for interacting with the Produce actor
    pub produce_client: ProduceClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MarketSystem {
    /// Creates the three actors, injects their dependencies, and spawns each
    /// one in its own Tokio task.
    ///
    /// `mailbox_size` bounds every actor's mailbox. Must be called inside a
    /// Tokio runtime.
    pub fn new(mailbox_size: usize) -> Self {
        // 1. Create actors (no dependencies yet)
        let (vendor_actor, vendor_client) = crate::vendor_actor::new(mailbox_size);
        let (produce_actor, produce_client) = crate::produce_actor::new(mailbox_size);
        let (order_actor, order_client) = crate::order_actor::new(mailbox_size);

        // 2. Start actors with injected context
        let vendor_handle = tokio::spawn(vendor_actor.run(()));
        let produce_handle = tokio::spawn(produce_actor.run(vendor_client.clone()));
        let order_handle = tokio::spawn(order_actor.run(produce_client.clone()));

        info!(mailbox_size, "Market system started");

        Self {
            vendor_client,
            produce_client,
            order_client,
            handles: vec![vendor_handle, produce_handle, order_handle],
        }
    }

    /// Clients bundled for the HTTP handlers.
    pub fn state(&self) -> AppState {
        AppState {
            vendors: self.vendor_client.clone(),
            produce: self.produce_client.clone(),
            orders: self.order_client.clone(),
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops the system's clients and waits for every actor task to finish.
    /// Any [`AppState`] handed out earlier must be dropped first, otherwise
    /// this waits for it.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.produce_client);
        drop(self.vendor_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for MarketSystem {
    fn default() -> Self {
        Self::new(DEFAULT_MAILBOX_SIZE)
    }
}

//! # System Lifecycle & Orchestration
//!
//! Starting, wiring, and shutting down the market's actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them when they start
//! running (`actor.run(context)`):
//!
//! ```rust,ignore
//! // No dependencies
//! impl ActorEntity for Vendor {
//!     type Context = ();
//! }
//!
//! // Checks that the owning vendor exists
//! impl ActorEntity for Produce {
//!     type Context = VendorClient;
//! }
//!
//! // Reserves stock on the ordered produce
//! impl ActorEntity for Order {
//!     type Context = ProduceClient;
//! }
//! ```
//!
//! ## Shutdown
//!
//! Dropping every client closes an actor's mailbox. Order holds the only
//! extra produce client and produce holds the only extra vendor client, so
//! the actors wind down in dependency order once [`MarketSystem::shutdown`]
//! drops its clients.

pub mod market_system;
pub mod tracing;

pub use market_system::MarketSystem;
pub use self::tracing::setup_tracing;

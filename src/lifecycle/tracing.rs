//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber: structured,
//! compact lines without module paths (actor logs carry an `entity_type`
//! field instead).
//!
//! ## Configuration
//!
//! `RUST_LOG` wins when set; otherwise the level from the configuration file
//! (`log_level`) applies.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads and every actor message
//! RUST_LOG=debug cargo run
//!
//! # Only the framework, verbosely
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **HTTP**: one span per request from `tower-http`'s `TraceLayer`
//! - **Actor Lifecycle**: `Actor started`, and `Shutdown` with the final store size
//! - **Entity Operations**: Create, Get, List, Update, Delete and Actions
//! - **Errors**: warnings with the entity id and failure reason
//!
//! ## Workflow Trace Example
//!
//! Placing an order with `RUST_LOG=info`:
//!
//! ```text
//! INFO place_order: Sending place_order to actor produce_id=produce_1
//! INFO Action ok entity_type="Produce" id=produce_1
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```
//!
//! With `RUST_LOG=debug` the payload is logged once at the client and each
//! cross-actor call shows up as its own step:
//!
//! ```text
//! DEBUG place_order: place_order called order=OrderCreate { produce_id: ProduceId(1), .. }
//! DEBUG Create entity_type="Order" params=OrderCreate { .. }
//! DEBUG Reserving stock produce_id=produce_1 quantity_kg=4.0
//! DEBUG Action entity_type="Produce" id=produce_1 action=ReserveStock { quantity_kg: 4.0 }
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_level` is used when `RUST_LOG` is unset or invalid.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .try_init();
}

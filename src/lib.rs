//! # Market Backend
//!
//! A farmers' market backend: vendors, their produce listings, and buyers'
//! orders, served over HTTP/JSON from in-memory state.
//!
//! Each entity type lives in its own single-writer actor built on the
//! `actor-framework` crate, so concurrent requests never race on a store or
//! an id counter.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain records ([`Vendor`](model::Vendor), [`Produce`](model::Produce),
//! [`Order`](model::Order)) with their create and patch payloads.
//!
//! ### 2. The Actors ([`vendor_actor`], [`produce_actor`], [`order_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) implementations and per-entity errors.
//! - Produce checks its vendor through an injected [`VendorClient`](clients::VendorClient).
//! - Orders reserve stock through an injected [`ProduceClient`](clients::ProduceClient).
//!
//! ### 3. The Interface ([`clients`])
//! Domain-specific wrappers around `ResourceClient`.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`MarketSystem`](lifecycle::MarketSystem) spawns and wires the actors and
//! shuts them down; [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ### 5. The Surface ([`api`], [`config`])
//! axum handlers, validation, the `{success, data, message}` envelope and
//! `{detail}` errors; YAML configuration for the binary.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! MARKET_CONFIG=config/default.yaml MARKET_PORT=8080 cargo run
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod produce_actor;
pub mod vendor_actor;

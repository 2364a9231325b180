//! # Food Cart
//!
//! The order-composition core of a food-ordering screen: pick the extras
//! for one food, adjust quantities, watch the total, mark the food as a
//! favorite and submit the order.
//!
//! ## Layers
//!
//! ### 1. The core ([`cart`])
//! Synchronous state with the invariants: the [`ExtrasLedger`](cart::ExtrasLedger),
//! the [`OrderComposer`](cart::OrderComposer) that derives the total on
//! every read, and the [`FavoriteCoordinator`](cart::FavoriteCoordinator)
//! state machine.
//!
//! ### 2. The session ([`session`])
//! An actor per screen. It serializes gestures, runs remote calls without
//! blocking them, drops results that arrive for a replaced load or after
//! teardown, and publishes a [`CartView`](session::CartView) snapshot over
//! a `watch` channel.
//!
//! ### 3. The catalog ([`clients`], [`food_actor`], [`favorite_actor`], [`order_actor`])
//! The [`Catalog`](clients::Catalog) trait is everything a session needs
//! from the outside world. [`CatalogClient`](clients::CatalogClient)
//! implements it over three resource actors built on `actor_framework`.
//!
//! ### 4. The orchestrator ([`lifecycle`])
//! [`CatalogSystem`](lifecycle::CatalogSystem) spins the actors up, wires
//! the order actor to the food actor, and shuts everything down.
//!
//! ## Errors
//!
//! Each actor has its own error type; [`CatalogError`](clients::CatalogError)
//! unifies them for the session, and [`CartError`](error::CartError) is
//! what the screen sees. No failure ends a session.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart;
pub mod clients;
pub mod config;
pub mod error;
pub mod favorite_actor;
pub mod food_actor;
pub mod lifecycle;
pub mod model;
pub mod money;
pub mod order_actor;
pub mod session;

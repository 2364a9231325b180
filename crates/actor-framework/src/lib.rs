//! # Actor Framework
//!
//! Resource-oriented actors on Tokio. Each resource type gets one
//! [`ResourceActor`] that owns its store and answers CRUD, `List` and
//! custom `Action` requests sequentially; the rest of the program talks to
//! it through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the resource's data and hooks.
//! 2. **Runtime** ([`ResourceActor`]): the message loop and the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed requests.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to
//! [`ResourceActor::new`]. All actors can therefore be created first and
//! wired afterwards:
//!
//! ```rust,ignore
//! let (food_actor, food_client) = ResourceActor::<Food>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(food_actor.run(()));
//! // Orders validate the food they reference.
//! tokio::spawn(order_actor.run(FoodClient::new(food_client.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Messages are processed **sequentially** within an actor; no locks.
//! - Different actors run in parallel.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted
//! expectations, so failure paths can be tested without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

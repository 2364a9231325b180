//! # Order Actor
//!
//! Accepted orders. This is the actor with a dependency: its
//! `Context` is a [`FoodClient`](crate::clients::FoodClient), injected
//! through `run()`, which `on_create` uses to validate each draft.
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run(food_client.clone()));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}

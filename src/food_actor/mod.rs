//! # Food Actor
//!
//! The menu. Foods are seeded with [`FoodClient::create_food`](crate::clients::FoodClient::create_food)
//! and read back by id when a cart screen opens. The actor has no
//! dependencies and no custom actions.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Food;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Food actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Food>, ResourceClient<Food>) {
    ResourceActor::new(buffer_size)
}

//! # Favorite Actor
//!
//! The customer's favorite foods, one entry per food id.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Favorite;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Favorite actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Favorite>, ResourceClient<Favorite>) {
    ResourceActor::new(buffer_size)
}

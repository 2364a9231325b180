//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient),
//! and the [`Catalog`] contract the cart session is written against.

pub mod catalog;
pub mod favorite_client;
pub mod food_client;
pub mod order_client;

pub use catalog::*;
pub use favorite_client::*;
pub use food_client::*;
pub use order_client::*;

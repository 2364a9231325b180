//! Pure data structures (DTOs). `Food`, `Favorite` and `Order` implement the
//! [`ActorEntity`](actor_framework::ActorEntity) trait in their actor modules.

pub mod extra;
pub mod favorite;
pub mod food;
pub mod order;

pub use extra::*;
pub use favorite::*;
pub use food::*;
pub use order::*;

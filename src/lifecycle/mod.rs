//! # Catalog Lifecycle
//!
//! Starting, wiring and stopping the in-process catalog actors, plus the
//! tracing subscriber used by the binary.
//!
//! Actors are created without their dependencies and receive them in
//! `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for Food  { type Context = ();         /* ... */ }
//! impl ActorEntity for Order { type Context = FoodClient; /* ... */ }
//! ```

mod catalog_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use catalog_system::CatalogSystem;

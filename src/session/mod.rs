//! # Cart Session
//!
//! One screen session as an actor: it owns the [`OrderComposer`](crate::cart::OrderComposer)
//! and the [`FavoriteCoordinator`](crate::cart::FavoriteCoordinator), talks
//! to a [`Catalog`](crate::clients::Catalog), and publishes a [`CartView`]
//! after every change.
//!
//! ## Ordering
//!
//! - Gestures are applied in the order they reach the inbox.
//! - Favorites are fetched only after the food fetch has succeeded.
//! - Favorite writes reach the catalog in toggle order.
//! - Results belonging to a replaced load, or arriving after the session
//!   stopped, never touch the session's state.
//!
//! ## Errors
//!
//! Failed remote calls come back to the caller as a [`CartError`](crate::error::CartError)
//! and are also kept in [`CartView::last_error`] until an operation of the
//! same kind succeeds or a new load starts.

mod actor;
mod handle;
mod message;
mod view;

pub use actor::CartSession;
pub use handle::CartHandle;
pub use view::CartView;

//! Synchronous core of the cart screen. Nothing here awaits; the session
//! drives these types from its own task.

mod composer;
mod favorite;
mod ledger;

pub use composer::OrderComposer;
pub use favorite::{FavoriteCoordinator, FavoriteStatus, FavoriteWrite, PendingToggle};
pub use ledger::ExtrasLedger;

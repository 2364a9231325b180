//! Messages of the session actor: commands from handles, and completions
//! of the remote calls the actor started.

use crate::cart::{FavoriteStatus, FavoriteWrite};
use crate::clients::CatalogError;
use crate::error::CartError;
use crate::model::{ExtraId, Food, FoodId, OrderDraft, OrderId};
use crate::session::CartView;
use tokio::sync::oneshot;

pub(crate) type Reply<R> = oneshot::Sender<Result<R, CartError>>;

pub(crate) enum Command {
    Load {
        food_id: FoodId,
        respond_to: Reply<CartView>,
    },
    IncrementExtra {
        id: ExtraId,
        respond_to: Reply<CartView>,
    },
    DecrementExtra {
        id: ExtraId,
        respond_to: Reply<CartView>,
    },
    IncrementFood {
        respond_to: Reply<CartView>,
    },
    DecrementFood {
        respond_to: Reply<CartView>,
    },
    ToggleFavorite {
        respond_to: Reply<FavoriteStatus>,
    },
    ComposeOrder {
        respond_to: Reply<OrderDraft>,
    },
    Submit {
        draft: OrderDraft,
        respond_to: Reply<OrderId>,
    },
    Close,
}

impl Command {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Command::Load { .. } => "load",
            Command::IncrementExtra { .. } => "increment_extra",
            Command::DecrementExtra { .. } => "decrement_extra",
            Command::IncrementFood { .. } => "increment_food",
            Command::DecrementFood { .. } => "decrement_food",
            Command::ToggleFavorite { .. } => "toggle_favorite",
            Command::ComposeOrder { .. } => "compose_order",
            Command::Submit { .. } => "submit",
            Command::Close => "close",
        }
    }
}

/// A favorite write queued for the writer task.
pub(crate) struct WriteJob {
    pub seq: u64,
    pub generation: u64,
    pub write: FavoriteWrite,
    pub respond_to: Reply<FavoriteStatus>,
}

pub(crate) enum Completion {
    FoodFetched {
        generation: u64,
        result: Result<Food, CatalogError>,
    },
    FavoritesFetched {
        generation: u64,
        result: Result<Vec<Food>, CatalogError>,
    },
    FavoriteWritten {
        job: WriteJob,
        result: Result<(), CatalogError>,
    },
    Submitted {
        result: Result<OrderId, CatalogError>,
        respond_to: Reply<OrderId>,
    },
}

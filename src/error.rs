//! # Cart Errors
//!
//! What a screen session reports back to its caller. Every variant is
//! recoverable: the session keeps running and the screen may retry.

use crate::clients::CatalogError;
use thiserror::Error;

/// Which fetch of a load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Food,
    Favorites,
}

impl std::fmt::Display for LoadStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadStage::Food => write!(f, "food"),
            LoadStage::Favorites => write!(f, "favorites"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Failed to load {stage}: {source}")]
    LoadFailure {
        stage: LoadStage,
        #[source]
        source: CatalogError,
    },

    #[error("Failed to update favorite: {0}")]
    ToggleFailure(#[source] CatalogError),

    #[error("Failed to submit order: {0}")]
    SubmitFailure(#[source] CatalogError),

    /// A later `load` replaced this one before it finished.
    #[error("Load superseded by a newer one")]
    Superseded,

    /// The gesture would push the total past what a price can hold.
    #[error("Order total out of range")]
    TotalOverflow,

    #[error("No food loaded")]
    NotLoaded,

    #[error("Favorite status not known yet")]
    FavoriteUnknown,

    #[error("Cart session closed")]
    SessionClosed,
}

impl CartError {
    pub fn load(stage: LoadStage, source: CatalogError) -> Self {
        CartError::LoadFailure { stage, source }
    }
}

/// Failures while shutting the catalog system down.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

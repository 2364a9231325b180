//! Error types for the Favorite actor.

use thiserror::Error;

/// Errors that can occur during favorite operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FavoriteError {
    /// The food is not among the favorites.
    #[error("Favorite not found: {0}")]
    NotFound(String),

    /// The food is already a favorite.
    #[error("Already a favorite: {0}")]
    AlreadyFavorite(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

//! Error types for the Food actor.

use crate::model::{ExtraId, FoodId};
use thiserror::Error;

/// Errors that can occur during food operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodError {
    /// The requested food was not found.
    #[error("Food not found: {0}")]
    NotFound(FoodId),

    /// A price or extra value below zero.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Two extras of one food share an id.
    #[error("Duplicate extra: {0}")]
    DuplicateExtra(ExtraId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

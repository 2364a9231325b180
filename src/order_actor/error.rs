//! Error types for the Order actor.

use crate::model::FoodId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The food in the draft is not on the menu.
    #[error("Unknown food: {0}")]
    UnknownFood(FoodId),

    /// The draft is malformed (zero quantity, foreign extra, ...).
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

//! # Catalog
//!
//! The remote operations a cart session depends on, behind one trait so
//! the session can run against the in-process actors or anything else
//! that speaks the same contract.
use crate::clients::{FavoriteClient, FoodClient, OrderClient};
use crate::favorite_actor::FavoriteError;
use crate::food_actor::FoodError;
use crate::model::{Food, FoodId, OrderDraft, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use thiserror::Error;

/// How a catalog call failed, independent of which resource answered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The service could not be reached or answered nothing.
    #[error("Network error: {0}")]
    Network(String),
}

impl From<FoodError> for CatalogError {
    fn from(e: FoodError) -> Self {
        match e {
            FoodError::NotFound(_) => CatalogError::NotFound(e.to_string()),
            FoodError::InvalidPrice(_) | FoodError::DuplicateExtra(_) => {
                CatalogError::Validation(e.to_string())
            }
            FoodError::ActorCommunicationError(msg) => CatalogError::Network(msg),
        }
    }
}

impl From<FavoriteError> for CatalogError {
    fn from(e: FavoriteError) -> Self {
        match e {
            FavoriteError::NotFound(_) => CatalogError::NotFound(e.to_string()),
            FavoriteError::AlreadyFavorite(_) => CatalogError::Conflict(e.to_string()),
            FavoriteError::ActorCommunicationError(msg) => CatalogError::Network(msg),
        }
    }
}

impl From<OrderError> for CatalogError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => CatalogError::NotFound(e.to_string()),
            OrderError::UnknownFood(_) | OrderError::ValidationError(_) => {
                CatalogError::Validation(e.to_string())
            }
            OrderError::ActorCommunicationError(msg) => CatalogError::Network(msg),
        }
    }
}

/// Remote operations consumed by a cart session. Every call may fail.
#[async_trait]
pub trait Catalog: Send + Sync + 'static {
    async fn get_food(&self, id: FoodId) -> Result<Food, CatalogError>;

    async fn list_favorites(&self) -> Result<Vec<Food>, CatalogError>;

    async fn add_favorite(&self, food: Food) -> Result<(), CatalogError>;

    async fn remove_favorite(&self, id: FoodId) -> Result<(), CatalogError>;

    async fn create_order(&self, draft: OrderDraft) -> Result<OrderId, CatalogError>;
}

/// [`Catalog`] backed by the food, favorite and order actors.
#[derive(Clone)]
pub struct CatalogClient {
    pub foods: FoodClient,
    pub favorites: FavoriteClient,
    pub orders: OrderClient,
}

impl CatalogClient {
    pub fn new(foods: FoodClient, favorites: FavoriteClient, orders: OrderClient) -> Self {
        Self {
            foods,
            favorites,
            orders,
        }
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn get_food(&self, id: FoodId) -> Result<Food, CatalogError> {
        Ok(self.foods.get_food(id).await?)
    }

    async fn list_favorites(&self) -> Result<Vec<Food>, CatalogError> {
        Ok(self.favorites.list_favorites().await?)
    }

    async fn add_favorite(&self, food: Food) -> Result<(), CatalogError> {
        Ok(self.favorites.add_favorite(food).await?)
    }

    async fn remove_favorite(&self, id: FoodId) -> Result<(), CatalogError> {
        Ok(self.favorites.remove_favorite(id).await?)
    }

    async fn create_order(&self, draft: OrderDraft) -> Result<OrderId, CatalogError> {
        Ok(self.orders.create_order(draft).await?)
    }
}

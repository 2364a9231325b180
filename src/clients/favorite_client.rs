//! # Favorite Client
//!
//! Wraps a `ResourceClient<Favorite>`; callers deal in foods, not in
//! favorite records.
use crate::favorite_actor::FavoriteError;
use crate::model::{Favorite, FavoriteCreate, Food, FoodId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Favorite actor.
#[derive(Clone)]
pub struct FavoriteClient {
    inner: ResourceClient<Favorite>,
}

impl FavoriteClient {
    pub fn new(inner: ResourceClient<Favorite>) -> Self {
        Self { inner }
    }

    /// Favorited foods, in ascending food id order.
    #[instrument(skip(self))]
    pub async fn list_favorites(&self) -> Result<Vec<Food>, FavoriteError> {
        let favorites = self.list().await?;
        debug!(count = favorites.len(), "Favorites listed");
        Ok(favorites.into_iter().map(|favorite| favorite.food).collect())
    }

    #[instrument(skip(self, food), fields(food_id = %food.id))]
    pub async fn add_favorite(&self, food: Food) -> Result<(), FavoriteError> {
        debug!("Sending request");
        self.inner
            .create(FavoriteCreate { food })
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn remove_favorite(&self, id: FoodId) -> Result<(), FavoriteError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Favorite> for FavoriteClient {
    type Error = FavoriteError;

    fn inner(&self) -> &ResourceClient<Favorite> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => FavoriteError::NotFound(id),
            FrameworkError::Conflict(id) => FavoriteError::AlreadyFavorite(id),
            other => FavoriteError::ActorCommunicationError(other.to_string()),
        }
    }
}

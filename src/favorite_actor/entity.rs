//! [`ActorEntity`] implementation for [`Favorite`].
//!
//! A favorite is stored under the id of the food it holds
//! ([`assign_id`](ActorEntity::assign_id)), so favoriting the same food
//! twice is a conflict and removing goes by food id.

use super::FavoriteError;
use crate::model::{Favorite, FavoriteCreate, FoodId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Favorite {
    type Id = FoodId;
    type Create = FavoriteCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = FavoriteError;

    fn assign_id(_generated: FoodId, params: &FavoriteCreate) -> FoodId {
        params.food.id
    }

    fn from_create_params(_id: FoodId, params: FavoriteCreate) -> Result<Self, FavoriteError> {
        Ok(Self { food: params.food })
    }
}

use crate::model::{Food, FoodId};

/// A bookmarked food.
///
/// Favorites are keyed by the id of the food they hold, so the same food
/// can be favorited at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub food: Food,
}

impl Favorite {
    pub fn id(&self) -> FoodId {
        self.food.id
    }
}

/// Payload for favoriting a food.
#[derive(Debug, Clone)]
pub struct FavoriteCreate {
    pub food: Food,
}

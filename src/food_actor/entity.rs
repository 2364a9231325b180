//! [`ActorEntity`] implementation for [`Food`].

use super::FoodError;
use crate::model::{Food, FoodCreate, FoodId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
impl ActorEntity for Food {
    type Id = FoodId;
    type Create = FoodCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = FoodError;

    /// Rejects negative prices and extras sharing an id.
    fn from_create_params(id: FoodId, params: FoodCreate) -> Result<Self, FoodError> {
        if params.unit_price.is_sign_negative() {
            return Err(FoodError::InvalidPrice(format!(
                "{} costs {}",
                params.name, params.unit_price
            )));
        }
        let mut seen = HashSet::new();
        for extra in &params.extras {
            if extra.unit_value.is_sign_negative() {
                return Err(FoodError::InvalidPrice(format!(
                    "{} costs {}",
                    extra.name, extra.unit_value
                )));
            }
            if !seen.insert(extra.id) {
                return Err(FoodError::DuplicateExtra(extra.id));
            }
        }

        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            unit_price: params.unit_price,
            image_url: params.image_url,
            extras: params.extras,
        })
    }
}

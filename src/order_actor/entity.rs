//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are created from an [`OrderDraft`] and validated against the
//! menu in [`on_create`](ActorEntity::on_create), using the injected
//! [`FoodClient`].

use super::OrderError;
use crate::clients::FoodClient;
use crate::food_actor::FoodError;
use crate::model::{Order, OrderDraft, OrderId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderDraft;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = FoodClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, draft: OrderDraft) -> Result<Self, OrderError> {
        if draft.food_quantity == 0 {
            return Err(OrderError::ValidationError(
                "food quantity must be at least 1".to_string(),
            ));
        }
        Order::new(id, draft)
            .ok_or_else(|| OrderError::ValidationError("order total overflows".to_string()))
    }

    /// Checks the draft against the catalog's copy of the food: the food
    /// must exist, every extra must be one of its extras, and every price
    /// must match the catalog's.
    async fn on_create(&mut self, foods: &FoodClient) -> Result<(), OrderError> {
        let food_id = self.draft.food.id;
        let food = foods.get_food(food_id).await.map_err(|e| match e {
            FoodError::NotFound(id) => OrderError::UnknownFood(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })?;

        if self.draft.food.unit_price != food.unit_price {
            return Err(OrderError::ValidationError(format!(
                "{} costs {}, not {}",
                food.name, food.unit_price, self.draft.food.unit_price
            )));
        }
        for extra in &self.draft.extras {
            let Some(definition) = food.extra(extra.id) else {
                return Err(OrderError::ValidationError(format!(
                    "{} is not offered with {}",
                    extra.id, food.name
                )));
            };
            if extra.unit_value != definition.unit_value {
                return Err(OrderError::ValidationError(format!(
                    "{} costs {}, not {}",
                    definition.name, definition.unit_value, extra.unit_value
                )));
            }
        }
        debug!(%food_id, total = %self.total, "Draft validated");
        Ok(())
    }
}

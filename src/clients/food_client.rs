//! # Food Client
//!
//! Wraps a `ResourceClient<Food>` with menu-specific calls.
use crate::food_actor::FoodError;
use crate::model::{Food, FoodCreate, FoodId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Food actor.
#[derive(Clone)]
pub struct FoodClient {
    inner: ResourceClient<Food>,
}

impl FoodClient {
    pub fn new(inner: ResourceClient<Food>) -> Self {
        Self { inner }
    }

    /// Adds a food to the menu.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_food(&self, params: FoodCreate) -> Result<FoodId, FoodError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches a food, turning an empty answer into [`FoodError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_food(&self, id: FoodId) -> Result<Food, FoodError> {
        self.get(id).await?.ok_or(FoodError::NotFound(id))
    }
}

#[async_trait]
impl ActorClient<Food> for FoodClient {
    type Error = FoodError;

    fn inner(&self) -> &ResourceClient<Food> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(source) => match source.downcast::<FoodError>() {
                Ok(food_error) => *food_error,
                Err(other) => FoodError::ActorCommunicationError(other.to_string()),
            },
            other => FoodError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn test_missing_food_is_not_found() {
        let mut mock = MockClient::<Food>::new();
        mock.expect_get(FoodId(9)).return_ok(None);

        let client = FoodClient::new(mock.client());
        let result = client.get_food(FoodId(9)).await;
        assert_eq!(result, Err(FoodError::NotFound(FoodId(9))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let mut mock = MockClient::<Food>::new();
        mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
            FoodError::InvalidPrice("Bacon costs -1".to_string()),
        )));

        let client = FoodClient::new(mock.client());
        let result = client
            .create_food(FoodCreate {
                name: "Ao molho".to_string(),
                description: String::new(),
                unit_price: rust_decimal::Decimal::ONE,
                image_url: String::new(),
                extras: vec![],
            })
            .await;
        assert!(matches!(result, Err(FoodError::InvalidPrice(_))));
    }
}

use crate::clients::{CatalogClient, FavoriteClient, FoodClient, OrderClient};
use crate::error::SystemError;
use tracing::{error, info};

/// Starts the food, favorite and order actors and wires them together.
///
/// The order actor is the only one with a dependency: it validates each
/// draft against the food actor, so it runs with a [`FoodClient`] as its
/// context.
///
/// ```rust,ignore
/// let system = CatalogSystem::new();
/// let food_id = system.food_client.create_food(params).await?;
/// let (cart, _) = CartSession::spawn(system.catalog(), CartConfig::default());
/// // ...
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub food_client: FoodClient,
    pub favorite_client: FavoriteClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    pub fn new() -> Self {
        Self::with_capacity(32)
    }

    /// Same as [`new`](Self::new) with `capacity` as every actor's inbox
    /// size. Zero is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (food_actor, food_client) = crate::food_actor::new(capacity);
        let (favorite_actor, favorite_client) = crate::favorite_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        let food_client = FoodClient::new(food_client);

        let food_handle = tokio::spawn(food_actor.run(()));
        let favorite_handle = tokio::spawn(favorite_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(food_client.clone()));

        Self {
            food_client,
            favorite_client: FavoriteClient::new(favorite_client),
            order_client: OrderClient::new(order_client),
            handles: vec![food_handle, favorite_handle, order_handle],
        }
    }

    /// A [`Catalog`](crate::clients::Catalog) over this system's actors.
    ///
    /// Sessions holding it keep the actors alive; close them before
    /// [`shutdown`](Self::shutdown).
    pub fn catalog(&self) -> CatalogClient {
        CatalogClient::new(
            self.food_client.clone(),
            self.favorite_client.clone(),
            self.order_client.clone(),
        )
    }

    /// Drops the clients and waits for every actor to stop.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down catalog...");

        // Each actor exits once the last sender of its inbox is gone. The
        // order actor holds a FoodClient, so the food actor stops after it.
        drop(self.order_client);
        drop(self.favorite_client);
        drop(self.food_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}

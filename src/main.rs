//! Demo: seeds the catalog with one food, composes an order with extras,
//! favorites the food and submits.

use food_cart::config::CartConfig;
use food_cart::lifecycle::{setup_tracing, CatalogSystem};
use food_cart::model::{ExtraDefinition, ExtraId, FoodCreate};
use food_cart::session::CartSession;
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting food cart demo");
    let system = CatalogSystem::new();

    let food_id = system
        .food_client
        .create_food(FoodCreate {
            name: "X-Burguer".to_string(),
            description: "Pão, hambúrguer, queijo e salada".to_string(),
            unit_price: Decimal::new(1000, 2),
            image_url: "https://example.com/x-burguer.png".to_string(),
            extras: vec![
                ExtraDefinition::new(11, "Bacon", Decimal::new(200, 2)),
                ExtraDefinition::new(12, "Ovo", Decimal::new(150, 2)),
            ],
        })
        .await?;
    info!(%food_id, "Food seeded");

    let config = CartConfig::default();
    let formatter = config.formatter.clone();
    let (cart, session_task) = CartSession::spawn(system.catalog(), config);

    let span = tracing::info_span!("cart_session", %food_id);
    let outcome = async {
        let view = cart.load(food_id).await?;
        info!(
            unit_price = %view.formatted_unit_price(&formatter).unwrap_or_default(),
            favorite = ?view.favorite,
            "Cart ready"
        );

        for _ in 0..3 {
            cart.increment_extra(ExtraId(11)).await?;
        }
        let view = cart.increment_food().await?;
        info!(
            food_quantity = view.food_quantity,
            total = %view.formatted_total(&formatter),
            "Order composed"
        );

        let favorite = cart.toggle_favorite().await?;
        info!(?favorite, "Favorite updated");

        cart.finish_order().await
    }
    .instrument(span)
    .await;

    match outcome {
        Ok(order_id) => info!(%order_id, "Order placed"),
        Err(e) => error!(error = %e, "Order failed"),
    }

    cart.close().await;
    drop(cart);
    session_task.await?;

    for order in system.order_client.list_orders().await? {
        info!(
            order_id = %order.id,
            total = %formatter.format(order.total),
            "Stored order"
        );
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}

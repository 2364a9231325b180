use actor_framework::ActorClient;
use food_cart::cart::FavoriteStatus;
use food_cart::clients::{Catalog, CatalogError};
use food_cart::config::CartConfig;
use food_cart::error::{CartError, LoadStage};
use food_cart::lifecycle::CatalogSystem;
use food_cart::model::{ExtraDefinition, ExtraId, FoodCreate, FoodId};
use food_cart::money::MoneyFormatter;
use food_cart::session::CartSession;
use rust_decimal_macros::dec;

fn burger() -> FoodCreate {
    FoodCreate {
        name: "X-Burguer".to_string(),
        description: "Pão, carne e queijo".to_string(),
        unit_price: dec!(10.00),
        image_url: "https://example.com/x-burguer.png".to_string(),
        extras: vec![
            ExtraDefinition::new(11, "Bacon", dec!(2.00)),
            ExtraDefinition::new(12, "Ovo", dec!(1.50)),
        ],
    }
}

/// Full end-to-end test with all real actors: load, compose, favorite,
/// submit, and read the stored order back.
#[tokio::test]
async fn test_full_cart_flow() {
    let system = CatalogSystem::new();
    let food_id = system
        .food_client
        .create_food(burger())
        .await
        .expect("Failed to seed food");

    let (cart, session) = CartSession::spawn(system.catalog(), CartConfig::default());

    let view = cart.load(food_id).await.expect("Load failed");
    assert!(!view.loading);
    assert_eq!(view.favorite, FavoriteStatus::NotFavorite);
    assert_eq!(view.food_quantity, 1);
    assert!(view.extras.iter().all(|e| e.quantity == 0));
    assert_eq!(
        view.formatted_unit_price(&MoneyFormatter::brl()).as_deref(),
        Some("R$ 10,00")
    );

    for _ in 0..3 {
        cart.increment_extra(ExtraId(11)).await.unwrap();
    }
    let view = cart.increment_food().await.unwrap();
    assert_eq!(view.total, dec!(26.00));
    assert_eq!(view.formatted_total(&MoneyFormatter::brl()), "R$ 26,00");

    assert_eq!(
        cart.toggle_favorite().await.unwrap(),
        FavoriteStatus::Favorite
    );
    let favorites = system.favorite_client.list_favorites().await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, food_id);

    let order_id = cart.finish_order().await.expect("Submit failed");
    let order = system.order_client.get_order(order_id).await.unwrap();
    assert_eq!(order.total, dec!(26.00));
    assert_eq!(order.draft.food_quantity, 2);
    let quantities: Vec<_> = order
        .draft
        .extras
        .iter()
        .map(|e| (e.id, e.quantity))
        .collect();
    assert_eq!(quantities, vec![(ExtraId(11), 3), (ExtraId(12), 0)]);

    cart.close().await;
    session.await.unwrap();
    drop(cart);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_reload_reconciles_favorite_and_resets_quantities() {
    let system = CatalogSystem::new();
    let food_id = system.food_client.create_food(burger()).await.unwrap();
    let (cart, _session) = CartSession::spawn(system.catalog(), CartConfig::default());

    cart.load(food_id).await.unwrap();
    cart.increment_extra(ExtraId(12)).await.unwrap();
    cart.increment_food().await.unwrap();
    cart.toggle_favorite().await.unwrap();

    let view = cart.load(food_id).await.unwrap();
    assert_eq!(view.favorite, FavoriteStatus::Favorite);
    assert_eq!(view.food_quantity, 1);
    assert_eq!(view.quantity_of(ExtraId(12)), Some(0));
    assert_eq!(view.total, dec!(10.00));

    assert_eq!(
        cart.toggle_favorite().await.unwrap(),
        FavoriteStatus::NotFavorite
    );
    assert!(system.favorite_client.list_favorites().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_food_surfaces_load_failure() {
    let system = CatalogSystem::new();
    let (cart, _session) = CartSession::spawn(system.catalog(), CartConfig::default());

    let err = cart.load(FoodId(42)).await.unwrap_err();
    assert!(matches!(
        err,
        CartError::LoadFailure {
            stage: LoadStage::Food,
            source: CatalogError::NotFound(_),
        }
    ));

    let view = cart.view();
    assert!(!view.is_loaded());
    assert!(!view.loading);
    assert_eq!(view.last_error, Some(err));
    assert_eq!(cart.increment_food().await, Err(CartError::NotLoaded));
    assert_eq!(cart.compose_order().await, Err(CartError::NotLoaded));
}

#[tokio::test]
async fn test_catalog_contract_errors() {
    let system = CatalogSystem::new();
    let food_id = system.food_client.create_food(burger()).await.unwrap();
    let catalog = system.catalog();
    let food = catalog.get_food(food_id).await.unwrap();

    catalog.add_favorite(food.clone()).await.unwrap();
    assert!(matches!(
        catalog.add_favorite(food).await,
        Err(CatalogError::Conflict(_))
    ));

    catalog.remove_favorite(food_id).await.unwrap();
    assert!(matches!(
        catalog.remove_favorite(food_id).await,
        Err(CatalogError::NotFound(_))
    ));

    assert!(system.order_client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_favorites_listed_by_food_id() {
    let system = CatalogSystem::new();
    let first = system.food_client.create_food(burger()).await.unwrap();
    let second = system
        .food_client
        .create_food(FoodCreate {
            name: "Misto quente".to_string(),
            ..burger()
        })
        .await
        .unwrap();
    let catalog = system.catalog();

    catalog
        .add_favorite(catalog.get_food(second).await.unwrap())
        .await
        .unwrap();
    catalog
        .add_favorite(catalog.get_food(first).await.unwrap())
        .await
        .unwrap();

    let ids: Vec<_> = catalog
        .list_favorites()
        .await
        .unwrap()
        .iter()
        .map(|f| f.id)
        .collect();
    assert_eq!(ids, vec![first, second]);
}

/// A favorite added elsewhere after the load: the add answers `Conflict`,
/// which the session takes as the flag already being set.
#[tokio::test]
async fn test_favorite_added_elsewhere_is_adopted() {
    let system = CatalogSystem::with_capacity(0);
    let food_id = system.food_client.create_food(burger()).await.unwrap();
    let catalog = system.catalog();
    let (cart, _session) = CartSession::spawn(system.catalog(), CartConfig::default());

    let view = cart.load(food_id).await.unwrap();
    assert_eq!(view.favorite, FavoriteStatus::NotFavorite);

    catalog
        .add_favorite(catalog.get_food(food_id).await.unwrap())
        .await
        .unwrap();

    assert_eq!(cart.toggle_favorite().await, Ok(FavoriteStatus::Favorite));
    let view = cart.view();
    assert_eq!(view.favorite, FavoriteStatus::Favorite);
    assert_eq!(view.last_error, None);
    assert_eq!(catalog.list_favorites().await.unwrap().len(), 1);
}

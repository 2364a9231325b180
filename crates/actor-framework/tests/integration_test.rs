use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq)]
struct Dish {
    id: u32,
    name: String,
    available: bool,
}

#[derive(Debug)]
struct DishCreate {
    name: String,
}

#[derive(Debug)]
struct DishUpdate {
    name: Option<String>,
}

#[derive(Debug)]
enum DishAction {
    Withdraw,
}

#[derive(Debug, thiserror::Error)]
#[error("Dish error")]
struct DishError;

#[async_trait]
impl ActorEntity for Dish {
    type Id = u32;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Action = DishAction;
    type ActionResult = bool;
    type Context = ();
    type Error = DishError;

    fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            available: true,
        })
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: DishAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            DishAction::Withdraw => {
                let changed = self.available;
                self.available = false;
                Ok(changed)
            }
        }
    }
}

/// A bookmark keyed by the dish it points at.
#[derive(Clone, Debug)]
struct Bookmark {
    dish_id: u32,
}

#[derive(Debug)]
struct BookmarkCreate {
    dish_id: u32,
}

#[async_trait]
impl ActorEntity for Bookmark {
    type Id = u32;
    type Create = BookmarkCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = DishError;

    fn assign_id(_generated: u32, params: &BookmarkCreate) -> u32 {
        params.dish_id
    }

    fn from_create_params(id: u32, _params: BookmarkCreate) -> Result<Self, Self::Error> {
        Ok(Self { dish_id: id })
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client
        .create(DishCreate {
            name: "Ao molho".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // 2. Action
    let changed: bool = client.perform_action(id, DishAction::Withdraw).await.unwrap();
    assert!(changed);
    let dish: Dish = client.get(id).await.unwrap().unwrap();
    assert!(!dish.available);

    let changed_again = client.perform_action(id, DishAction::Withdraw).await.unwrap();
    assert!(!changed_again);

    // 3. Update
    let updated = client
        .update(
            id,
            DishUpdate {
                name: Some("Veggie".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Veggie");

    // 4. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    for name in ["A", "B", "C"] {
        client.create(DishCreate { name: name.into() }).await.unwrap();
    }
    client.delete(2).await.unwrap();

    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[tokio::test]
async fn test_caller_chosen_ids_conflict() {
    let (actor, client) = ResourceActor::<Bookmark>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(BookmarkCreate { dish_id: 42 }).await.unwrap();
    assert_eq!(id, 42);

    let again = client.create(BookmarkCreate { dish_id: 42 }).await;
    assert!(matches!(again, Err(FrameworkError::Conflict(ref id)) if id == "42"));

    client.delete(42).await.unwrap();
    assert_eq!(client.create(BookmarkCreate { dish_id: 42 }).await.unwrap(), 42);
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_closed_actor_is_unreachable() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    drop(actor);

    let err = client.get(1).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}

#[tokio::test]
async fn test_default_hooks_accept_updates_and_actions() {
    let (actor, client) = ResourceActor::<Bookmark>::new(10);
    tokio::spawn(actor.run(()));

    client.create(BookmarkCreate { dish_id: 7 }).await.unwrap();

    let updated = client.update(7, ()).await.unwrap();
    assert_eq!(updated.dish_id, 7);
    client.perform_action(7, ()).await.unwrap();

    let missing = client.update(8, ()).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(ref id)) if id == "8"));
}

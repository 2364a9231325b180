//! # ActorEntity Trait
//!
//! The contract every catalog resource (food, favorite, order) implements
//! to be managed by the generic [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types pin the id, the create/update payloads, the custom
//! actions, the injected context and the error type of each resource.
//! Only `from_create_params` is required; every hook has a default, so
//! an entity implements just the ones it needs.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are async so they can call other actors. The `Context` type is
/// injected into every hook when the actor is started, not when it is
/// built ("late binding"), which lets actors depend on each other's clients.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and
    /// ordered so listings come back deterministically.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug + Default;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum for the whole actor rather than one per message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Picks the id the new entity is stored under.
    ///
    /// `generated` comes from the actor's sequential counter. Resources
    /// whose identity is owned by the caller (a favorite is keyed by the
    /// food it points at) return the id carried in `params` instead.
    fn assign_id(generated: Self::Id, _params: &Self::Create) -> Self::Id {
        generated
    }

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    /// Returning an error rejects the creation.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received. The default accepts the
    /// update without changing anything.
    async fn on_update(
        &mut self,
        _update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action. Entities without actions
    /// keep the default, which answers `ActionResult::default()`.
    async fn handle_action(
        &mut self,
        _action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error> {
        Ok(Self::ActionResult::default())
    }
}

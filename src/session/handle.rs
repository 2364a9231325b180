//! # Cart Handle
//!
//! The screen's side of a session. Each method sends one [`Command`] and
//! waits for the actor's answer; a closed session answers every call with
//! [`CartError::SessionClosed`].

use crate::cart::FavoriteStatus;
use crate::error::CartError;
use crate::model::{ExtraId, FoodId, OrderDraft, OrderId};
use crate::session::message::{Command, Reply};
use crate::session::CartView;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::instrument;

#[derive(Clone)]
pub struct CartHandle {
    sender: mpsc::Sender<Command>,
    view: watch::Receiver<CartView>,
}

impl CartHandle {
    pub(crate) fn new(sender: mpsc::Sender<Command>, view: watch::Receiver<CartView>) -> Self {
        Self { sender, view }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Reply<R>) -> Command,
    ) -> Result<R, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| CartError::SessionClosed)?;
        response.await.map_err(|_| CartError::SessionClosed)?
    }

    /// Loads a food and its favorite status. Anything the session held
    /// before is discarded as soon as the load starts.
    #[instrument(skip(self))]
    pub async fn load(&self, food_id: FoodId) -> Result<CartView, CartError> {
        self.request(|respond_to| Command::Load {
            food_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn increment_extra(&self, id: ExtraId) -> Result<CartView, CartError> {
        self.request(|respond_to| Command::IncrementExtra { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn decrement_extra(&self, id: ExtraId) -> Result<CartView, CartError> {
        self.request(|respond_to| Command::DecrementExtra { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn increment_food(&self) -> Result<CartView, CartError> {
        self.request(|respond_to| Command::IncrementFood { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn decrement_food(&self) -> Result<CartView, CartError> {
        self.request(|respond_to| Command::DecrementFood { respond_to })
            .await
    }

    /// Flips the favorite flag and waits for the remote write.
    ///
    /// The flipped flag is published before the write is sent. On success
    /// this returns the status the toggle moved to.
    #[instrument(skip(self))]
    pub async fn toggle_favorite(&self) -> Result<FavoriteStatus, CartError> {
        self.request(|respond_to| Command::ToggleFavorite { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn compose_order(&self) -> Result<OrderDraft, CartError> {
        self.request(|respond_to| Command::ComposeOrder { respond_to })
            .await
    }

    #[instrument(skip(self, draft), fields(food_id = %draft.food.id))]
    pub async fn submit(&self, draft: OrderDraft) -> Result<OrderId, CartError> {
        self.request(|respond_to| Command::Submit { draft, respond_to })
            .await
    }

    /// [`compose_order`](Self::compose_order) followed by [`submit`](Self::submit).
    pub async fn finish_order(&self) -> Result<OrderId, CartError> {
        let draft = self.compose_order().await?;
        self.submit(draft).await
    }

    /// Ends the session. Results of calls still in flight are dropped.
    pub async fn close(&self) {
        let _ = self.sender.send(Command::Close).await;
    }

    /// The latest published snapshot.
    pub fn view(&self) -> CartView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CartView> {
        self.view.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

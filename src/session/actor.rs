use crate::cart::{FavoriteCoordinator, FavoriteStatus, FavoriteWrite, OrderComposer};
use crate::clients::{Catalog, CatalogError};
use crate::config::CartConfig;
use crate::error::{CartError, LoadStage};
use crate::model::{Food, FoodId, OrderDraft, OrderId};
use crate::session::message::{Command, Completion, Reply, WriteJob};
use crate::session::{CartHandle, CartView};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// The actor behind one cart screen.
///
/// Gestures arrive on the command inbox and are applied one at a time.
/// Remote calls run in their own tasks and come back on the completion
/// channel, so the session keeps taking gestures while a load or submit
/// is in flight.
///
/// ```rust,ignore
/// let (cart, task) = CartSession::spawn(catalog, CartConfig::default());
/// cart.load(FoodId(1)).await?;
/// cart.increment_extra(ExtraId(11)).await?;
/// let order_id = cart.finish_order().await?;
/// cart.close().await;
/// task.await?;
/// ```
///
/// Each load bumps the session's generation. A fetch result whose
/// generation no longer matches is dropped, and once the session stops
/// (on [`close`](CartHandle::close) or when every handle is gone) nothing
/// that completes later touches its state.
pub struct CartSession<C: Catalog> {
    catalog: Arc<C>,
    config: CartConfig,
    receiver: mpsc::Receiver<Command>,
    completions: mpsc::UnboundedReceiver<Completion>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    writer: mpsc::UnboundedSender<WriteJob>,
    writer_rx: Option<mpsc::UnboundedReceiver<WriteJob>>,
    view: watch::Sender<CartView>,

    composer: OrderComposer,
    favorite: FavoriteCoordinator,
    generation: u64,
    pending_load: Option<Reply<CartView>>,
    submits_in_flight: usize,
    last_error: Option<CartError>,
}

impl<C: Catalog> CartSession<C> {
    /// Creates a session and the handle that drives it. Nothing runs until
    /// [`run`](Self::run) is awaited.
    pub fn new(catalog: C, config: CartConfig) -> (Self, CartHandle) {
        let (sender, receiver) = mpsc::channel(config.channel_capacity.max(1));
        let (completion_tx, completions) = mpsc::unbounded_channel();
        let (writer, writer_rx) = mpsc::unbounded_channel();

        let composer = OrderComposer::new();
        let favorite = FavoriteCoordinator::new();
        let initial = CartView::capture(&composer, favorite.status(), false, false, None);
        let (view, view_rx) = watch::channel(initial);

        let session = Self {
            catalog: Arc::new(catalog),
            config,
            receiver,
            completions,
            completion_tx,
            writer,
            writer_rx: Some(writer_rx),
            view,
            composer,
            favorite,
            generation: 0,
            pending_load: None,
            submits_in_flight: 0,
            last_error: None,
        };
        (session, CartHandle::new(sender, view_rx))
    }

    /// Creates a session and spawns it on the current runtime.
    pub fn spawn(catalog: C, config: CartConfig) -> (CartHandle, JoinHandle<()>) {
        let (session, handle) = Self::new(catalog, config);
        (handle, tokio::spawn(session.run()))
    }

    /// Runs the session until it is closed or every handle is dropped.
    pub async fn run(mut self) {
        info!("Cart session started");
        if let Some(jobs) = self.writer_rx.take() {
            tokio::spawn(write_favorites(
                self.catalog.clone(),
                jobs,
                self.completion_tx.clone(),
            ));
        }

        loop {
            tokio::select! {
                command = self.receiver.recv() => {
                    let Some(command) = command else { break };
                    debug!(command = command.name(), "Command");
                    if matches!(command, Command::Close) {
                        break;
                    }
                    self.handle_command(command);
                }
                Some(completion) = self.completions.recv() => {
                    self.handle_completion(completion);
                }
            }
        }

        if let Some(respond_to) = self.pending_load.take() {
            let _ = respond_to.send(Err(CartError::SessionClosed));
        }
        info!(generation = self.generation, "Cart session closed");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Load {
                food_id,
                respond_to,
            } => self.start_load(food_id, respond_to),
            Command::IncrementExtra { id, respond_to } => {
                let result = self.edit(|composer| {
                    if !composer.increment_extra(id)? {
                        warn!(extra_id = %id, "Increment of unknown extra ignored");
                    }
                    Ok(())
                });
                let _ = respond_to.send(result);
            }
            Command::DecrementExtra { id, respond_to } => {
                let result = self.edit(|composer| {
                    if !composer.decrement_extra(id) {
                        warn!(extra_id = %id, "Decrement of unknown extra ignored");
                    }
                    Ok(())
                });
                let _ = respond_to.send(result);
            }
            Command::IncrementFood { respond_to } => {
                let result = self.edit(OrderComposer::increment_food_quantity);
                let _ = respond_to.send(result);
            }
            Command::DecrementFood { respond_to } => {
                let result = self.edit(|composer| {
                    composer.decrement_food_quantity();
                    Ok(())
                });
                let _ = respond_to.send(result);
            }
            Command::ToggleFavorite { respond_to } => self.toggle_favorite(respond_to),
            Command::ComposeOrder { respond_to } => {
                let draft = self.composer.compose_order().ok_or(CartError::NotLoaded);
                let _ = respond_to.send(draft);
            }
            Command::Submit { draft, respond_to } => self.start_submit(draft, respond_to),
            Command::Close => {}
        }
    }

    fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::FoodFetched { generation, result } => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "Stale food discarded");
                    return;
                }
                self.food_fetched(result);
            }
            Completion::FavoritesFetched { generation, result } => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "Stale favorites discarded");
                    return;
                }
                self.favorites_fetched(result);
            }
            Completion::FavoriteWritten { job, result } => self.favorite_written(job, result),
            Completion::Submitted { result, respond_to } => {
                self.submits_in_flight = self.submits_in_flight.saturating_sub(1);
                let result = match result {
                    Ok(order_id) => {
                        info!(%order_id, "Order submitted");
                        self.clear_error(|e| matches!(e, CartError::SubmitFailure(_)));
                        Ok(order_id)
                    }
                    Err(e) => {
                        warn!(error = %e, "Submit failed");
                        Err(self.record(CartError::SubmitFailure(e)))
                    }
                };
                self.publish();
                let _ = respond_to.send(result);
            }
        }
    }

    // =========================================================================
    // Load
    // =========================================================================

    fn start_load(&mut self, food_id: FoodId, respond_to: Reply<CartView>) {
        self.generation += 1;
        if let Some(previous) = self.pending_load.replace(respond_to) {
            let _ = previous.send(Err(CartError::Superseded));
        }
        info!(%food_id, generation = self.generation, "Loading food");

        self.composer.reset();
        self.favorite.reset();
        self.last_error = None;
        self.publish();

        let catalog = self.catalog.clone();
        let completions = self.completion_tx.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let result = catalog.get_food(food_id).await;
            let _ = completions.send(Completion::FoodFetched { generation, result });
        });
    }

    fn food_fetched(&mut self, result: Result<Food, CatalogError>) {
        let food = match result {
            Ok(food) => food,
            Err(e) => {
                warn!(error = %e, generation = self.generation, "Food fetch failed");
                self.fail_load(CartError::load(LoadStage::Food, e));
                return;
            }
        };

        info!(
            food_id = %food.id,
            unit_price = %self.config.formatter.format(food.unit_price),
            extras = food.extras.len(),
            "Food loaded"
        );
        let food_id = food.id;
        self.composer.apply(food);
        self.publish();

        let catalog = self.catalog.clone();
        let completions = self.completion_tx.clone();
        let generation = self.generation;
        debug!(%food_id, "Fetching favorites");
        tokio::spawn(async move {
            let result = catalog.list_favorites().await;
            let _ = completions.send(Completion::FavoritesFetched { generation, result });
        });
    }

    fn favorites_fetched(&mut self, result: Result<Vec<Food>, CatalogError>) {
        let favorites = match result {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!(error = %e, generation = self.generation, "Favorites fetch failed");
                self.fail_load(CartError::load(LoadStage::Favorites, e));
                return;
            }
        };
        let Some(food_id) = self.composer.food().map(|f| f.id) else {
            self.fail_load(CartError::NotLoaded);
            return;
        };

        let status = self.favorite.resolve(food_id, &favorites);
        info!(%food_id, ?status, "Favorite status resolved");
        let view = self.publish();
        if let Some(respond_to) = self.pending_load.take() {
            let _ = respond_to.send(Ok(view));
        }
    }

    fn fail_load(&mut self, error: CartError) {
        self.record(error.clone());
        self.publish();
        if let Some(respond_to) = self.pending_load.take() {
            let _ = respond_to.send(Err(error));
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    fn edit(
        &mut self,
        apply: impl FnOnce(&mut OrderComposer) -> Result<(), CartError>,
    ) -> Result<CartView, CartError> {
        if !self.composer.is_loaded() {
            warn!("Gesture before a food was loaded");
            return Err(CartError::NotLoaded);
        }
        if let Err(e) = apply(&mut self.composer) {
            warn!(error = %e, "Gesture refused");
            self.record(e.clone());
            self.publish();
            return Err(e);
        }
        self.clear_error(|e| matches!(e, CartError::TotalOverflow));
        let view = self.publish();
        debug!(total = %view.total, food_quantity = view.food_quantity, "Cart updated");
        Ok(view)
    }

    fn toggle_favorite(&mut self, respond_to: Reply<FavoriteStatus>) {
        let Some(food) = self.composer.food() else {
            let _ = respond_to.send(Err(CartError::NotLoaded));
            return;
        };
        let Some(pending) = self.favorite.toggle(food) else {
            let _ = respond_to.send(Err(CartError::FavoriteUnknown));
            return;
        };

        let target = pending.write.target();
        info!(food_id = %food.id, ?target, seq = pending.seq, "Favorite toggled");
        self.publish();

        let job = WriteJob {
            seq: pending.seq,
            generation: self.generation,
            write: pending.write,
            respond_to,
        };
        if let Err(mpsc::error::SendError(job)) = self.writer.send(job) {
            let stopped = CatalogError::Network("Favorite writer stopped".to_string());
            self.favorite_written(job, Err(stopped));
        }
    }

    fn favorite_written(&mut self, job: WriteJob, result: Result<(), CatalogError>) {
        let target = job.write.target();
        let result = match result {
            Err(e) if job.write.already_applied(&e) => {
                debug!(seq = job.seq, error = %e, "Favorite already in place");
                Ok(())
            }
            other => other,
        };

        match result {
            Ok(()) => {
                debug!(seq = job.seq, "Favorite write done");
                if job.generation == self.generation {
                    self.favorite.write_succeeded(target);
                    self.clear_error(|e| matches!(e, CartError::ToggleFailure(_)));
                    self.publish();
                }
                let _ = job.respond_to.send(Ok(target));
            }
            Err(e) => {
                warn!(seq = job.seq, error = %e, "Favorite write failed");
                let error = CartError::ToggleFailure(e);
                if job.generation == self.generation {
                    let reverted = self
                        .favorite
                        .write_failed(job.seq, self.config.on_toggle_failure);
                    if reverted {
                        info!(status = ?self.favorite.status(), "Favorite rolled back");
                    }
                    self.record(error.clone());
                    self.publish();
                }
                let _ = job.respond_to.send(Err(error));
            }
        }
    }

    fn start_submit(&mut self, draft: OrderDraft, respond_to: Reply<OrderId>) {
        info!(food_id = %draft.food.id, total = ?draft.total(), "Submitting order");
        self.submits_in_flight += 1;
        self.publish();

        let catalog = self.catalog.clone();
        let completions = self.completion_tx.clone();
        tokio::spawn(async move {
            let result = catalog.create_order(draft).await;
            let _ = completions.send(Completion::Submitted { result, respond_to });
        });
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    fn record(&mut self, error: CartError) -> CartError {
        self.last_error = Some(error.clone());
        error
    }

    fn clear_error(&mut self, kind: impl Fn(&CartError) -> bool) {
        if self.last_error.as_ref().is_some_and(kind) {
            self.last_error = None;
        }
    }

    fn publish(&self) -> CartView {
        let view = CartView::capture(
            &self.composer,
            self.favorite.status(),
            self.pending_load.is_some(),
            self.submits_in_flight > 0,
            self.last_error.clone(),
        );
        self.view.send_replace(view.clone());
        view
    }
}

/// Sends favorite writes one after another, in the order they were queued.
async fn write_favorites<C: Catalog>(
    catalog: Arc<C>,
    mut jobs: mpsc::UnboundedReceiver<WriteJob>,
    completions: mpsc::UnboundedSender<Completion>,
) {
    while let Some(job) = jobs.recv().await {
        let result = match &job.write {
            FavoriteWrite::Add(food) => catalog.add_favorite(food.clone()).await,
            FavoriteWrite::Remove(id) => catalog.remove_favorite(*id).await,
        };
        if completions
            .send(Completion::FavoriteWritten { job, result })
            .is_err()
        {
            break;
        }
    }
}

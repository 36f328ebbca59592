//! # Generic Actor Server
//!
//! `ResourceActor` is the server half of the pattern: it owns the entity
//! store and the receiving end of the request channel, and processes messages
//! one at a time. Exclusive ownership of the store within a single task is
//! what makes every handler a critical section — no `Mutex`, no `RwLock`.
//!
//! ## Usage pattern
//!
//! 1. **Create** — `ResourceActor::new(buffer, id_factory)` returns the actor
//!    and its [`ResourceClient`].
//! 2. **Wire** — dependencies (clients of other actors, config, clock) are
//!    passed to `run(context)`, not to `new()`. Late binding breaks circular
//!    construction ordering between interdependent actors.
//! 3. **Run** — `tokio::spawn(actor.run(context))`. The loop exits when every
//!    client handle has been dropped.
//!
//! ## Operation semantics
//!
//! * **Create** — id from the factory, `from_create_params`, then the async
//!   `on_create` hook; the entity is inserted only if the hook succeeds, so
//!   a failed creation persists nothing.
//! * **Get** — clone-by-id, `None` when absent.
//! * **Find** — scans the store with `matches(filter)` and returns every hit
//!   in one response (a batched secondary lookup).
//! * **Update** — `on_update` mutates the entity in place; the updated state
//!   is returned to the caller.
//! * **Delete** — `on_delete(params)` runs first and may veto; only on `Ok`
//!   is the record removed.
//! * **Action** — dispatches to `handle_action` for non-CRUD operations.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    id_factory: Box<dyn Fn() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When full, client
    ///   calls wait for space.
    /// * `id_factory` - Produces the id for each created entity. Typically an
    ///   atomic counter closure or a UUID generator.
    pub fn new(
        buffer_size: usize,
        id_factory: impl Fn() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            id_factory: Box::new(id_factory),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes.
    ///
    /// The `context` is injected into every entity hook, giving entities
    /// access to dependencies that were created after this actor was
    /// instantiated.
    pub async fn run(mut self, context: T::Context) {
        // Short type name, e.g. "Order" instead of the full module path.
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.id_factory)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Find { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, hits = items.len(), "Find");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(params, &context).await {
                            warn!(entity_type, %id, error = %e, "on_delete vetoed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

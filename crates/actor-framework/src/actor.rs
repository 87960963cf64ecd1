//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state
//! of one entity type. It is the "Server" side of the Actor Model: messages
//! are processed sequentially, so the store and the id counter are never
//! touched by two requests at once.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Concurrency Model
/// The actor owns its `store` and `next_id` outright and handles one message
/// at a time inside its own Tokio task. Writes are therefore serialized and a
/// read can never observe a half-applied write, without any `Mutex`.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// # Operations
///
/// * **Create**:
///     1. Builds the entity with the id the counter currently points at.
///     2. Rejects it if [`ActorEntity::conflicts_with`] reports a clash with a stored entity.
///     3. Runs the `on_create` hook.
///     4. Stores the entity and only then advances the counter, so rejected
///        creates never burn an id and ids are never reused.
///
///     Once `u32::MAX` has been issued every further create fails with
///     [`FrameworkError::IdSpaceExhausted`] before any hook runs.
///
/// * **Get** / **List**: clone out of the store; `List` is sorted by id.
///
/// * **Update**: runs `on_update` on the stored entity and returns the new state.
///
/// * **Delete**: runs `on_delete`, then removes the entity.
///
/// * **Action**: runs `handle_action` on the stored entity and returns its result.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    // Wider than the id so issuing `u32::MAX` cannot overflow it
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox. When it is full, client
    /// calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is injected into every entity hook and dropped when the
    /// loop ends, releasing any clients it holds.
    pub async fn run(mut self, context: T::Context) {
        // "Vendor" instead of "market_backend::model::vendor::Vendor"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let mut items: Vec<(T::Id, T)> = self
                        .store
                        .iter()
                        .map(|(id, item)| (id.clone(), item.clone()))
                        .collect();
                    items.sort_by(|a, b| a.0.cmp(&b.0));
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items.into_iter().map(|(_, item)| item).collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Hooks mutate a scratch copy so a failed update leaves the stored entity untouched
                        let mut draft = item.clone();
                        if let Err(e) = draft.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        *item = draft.clone();
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(draft));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
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
                        let mut draft = item.clone();
                        let result = draft
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => {
                                *item = draft;
                                info!(entity_type, %id, "Action ok");
                            }
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

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T::Id, FrameworkError> {
        let raw_id = u32::try_from(self.next_id).map_err(|_| FrameworkError::IdSpaceExhausted)?;
        let id = T::Id::from(raw_id);
        let mut item = T::from_create_params(id.clone(), params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        if let Some(reason) = self.store.values().find_map(|existing| item.conflicts_with(existing)) {
            return Err(FrameworkError::Conflict(reason));
        }

        item.on_create(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        self.store.insert(id.clone(), item);
        self.next_id += 1;
        Ok(id)
    }
}

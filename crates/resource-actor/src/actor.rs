//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single writer for one collection. It
//! processes requests sequentially, so no two operations on the same collection ever
//! interleave mid-mutation.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::id::IdAllocator;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns one collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the collection (`store`), the
/// id allocator and the receiver end of the channel. Every handle to the collection is a
/// [`ResourceClient`], so there is exactly one owner of the mutable state and no lock.
///
/// The store is a `BTreeMap`: ids are allocated in increasing order, so iterating by key
/// yields records in insertion order.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and its client.
/// 2.  **Seed** (optional): `actor.seed(records)` before the loop starts.
/// 3.  **Run**: spawn `actor.run(context)`; the context is handed to every hook.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug)] struct TagUpdate { label: Option<String> }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     type Context = ();
///     type Error = TagError;
///     const KIND: &'static str = "Tag";
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, p: TagCreate) -> Result<Self, TagError> {
///         Ok(Self { id, label: p.label })
///     }
///     async fn on_update(&mut self, u: TagUpdate, _: &()) -> Result<(), TagError> {
///         if let Some(label) = u.label { self.label = label; }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let tag = client.create(TagCreate { label: "rust".into() }).await.unwrap();
///     assert_eq!(tag.id, 0);
/// }
/// ```
///
/// ## Operations
///
/// * **List**: clones every record, in id order.
/// * **Get**: clone of the record, or `None`.
/// * **Create**: peeks the next id, builds the record, runs `on_create`, inserts it and
///   only then consumes the id. Returns the stored record.
/// * **Update**: clones the stored record, runs `on_update` on the clone, and replaces the
///   stored record with the clone on success. Returns the new record.
/// * **Delete**: runs `on_delete`, then removes the record.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    ids: IdAllocator,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client
    /// calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            ids: IdAllocator::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Inserts records directly, without running `on_create`.
    ///
    /// The allocator moves past the largest seeded id.
    pub fn seed<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = T>,
    {
        for record in records {
            let id = record.id();
            self.ids.observe(id.into());
            self.store.insert(id, record);
        }
        debug!(entity_type = T::KIND, size = self.store.len(), next_id = ?self.ids.peek(), "Seeded");
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// `context` is passed to every hook. This lets an entity reach other actors whose
    /// clients were created after this actor was built.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = T::KIND;
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(next) = self.ids.peek() else {
                        warn!(entity_type, "Ids exhausted");
                        let _ = respond_to
                            .send(Err(FrameworkError::IdsExhausted { kind: entity_type }));
                        continue;
                    };
                    let id = T::Id::from(next);

                    match T::from_create_params(id, params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.ids.commit();
                            self.store.insert(id, item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::not_found::<T>(id)));
                        continue;
                    };

                    let mut replacement = current.clone();
                    if let Err(e) = replacement.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id, replacement.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(replacement));
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
                        let _ = respond_to.send(Err(FrameworkError::not_found::<T>(id)));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

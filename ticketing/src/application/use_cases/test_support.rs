//! Port doubles for use case tests

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{
    EventReader, EventWriter, RegistryReader, RegistryWriter, StoreError, StoreResult,
};
use crate::domain::{CustomerId, EntityKind, Event, EventId, Registrable, Ticket};
use crate::infrastructure::InMemoryEventRepository;

fn offline(store: &str) -> StoreError {
    StoreError::Unavailable(format!("{} offline", store))
}

/// Registry whose every call fails as if the backing store were down
pub struct UnavailableRegistry;

#[async_trait]
impl<E: Registrable> RegistryReader<E> for UnavailableRegistry {
    async fn find_by_id(&self, _id: &E::Id) -> StoreResult<Option<E>> {
        Err(offline("registry"))
    }

    async fn find_by_key(&self, _key: &E::Key) -> StoreResult<Option<E>> {
        Err(offline("registry"))
    }
}

#[async_trait]
impl<E: Registrable> RegistryWriter<E> for UnavailableRegistry {
    async fn save(&self, _entity: E) -> StoreResult<E> {
        Err(offline("registry"))
    }
}

/// Event store whose every call fails
pub struct UnavailableEventStore;

#[async_trait]
impl EventReader for UnavailableEventStore {
    async fn find_by_id(&self, _id: &EventId) -> StoreResult<Option<Event>> {
        Err(offline("event store"))
    }

    async fn find_ticket_by_event_and_customer(
        &self,
        _event_id: &EventId,
        _customer_id: &CustomerId,
    ) -> StoreResult<Option<Ticket>> {
        Err(offline("event store"))
    }
}

#[async_trait]
impl EventWriter for UnavailableEventStore {
    async fn save(&self, _event: Event) -> StoreResult<Event> {
        Err(offline("event store"))
    }
}

/// Event store that reads through to an in-memory repository but refuses
/// every save as if another writer always got there first
pub struct StaleEventStore {
    inner: Arc<InMemoryEventRepository>,
    saves: AtomicUsize,
}

impl StaleEventStore {
    pub fn new(inner: Arc<InMemoryEventRepository>) -> Self {
        Self {
            inner,
            saves: AtomicUsize::new(0),
        }
    }

    pub fn save_attempts(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventReader for StaleEventStore {
    async fn find_by_id(&self, id: &EventId) -> StoreResult<Option<Event>> {
        self.inner.find_by_id(id).await
    }

    async fn find_ticket_by_event_and_customer(
        &self,
        event_id: &EventId,
        customer_id: &CustomerId,
    ) -> StoreResult<Option<Ticket>> {
        self.inner
            .find_ticket_by_event_and_customer(event_id, customer_id)
            .await
    }
}

#[async_trait]
impl EventWriter for StaleEventStore {
    async fn save(&self, event: Event) -> StoreResult<Event> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::StaleAggregate {
            kind: EntityKind::Event,
            id: event.id.to_string(),
            expected: event.version(),
            actual: event.version() + 1,
        })
    }
}

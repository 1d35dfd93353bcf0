use crate::application::ports::{EventReader, EventWriter, StoreError, StoreResult};
use crate::domain::{CustomerId, EntityKind, Event, EventId, Ticket};
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// In-memory event repository
///
/// Stores each event together with its tickets. A save replaces the whole
/// aggregate in a single insert, so readers never see a ticket without the
/// matching capacity change or the other way round.
///
/// Saves are versioned. Writers are serialized, and a save whose event was
/// loaded at an older version than the stored copy is refused with
/// [`StoreError::StaleAggregate`].
pub struct InMemoryEventRepository {
    events: Arc<DashMap<EventId, Event>>,
    write_lock: Arc<Mutex<()>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self {
            events: Arc::new(DashMap::new()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all stored events
    pub fn list(&self) -> Vec<Event> {
        self.events.iter().map(|e| e.value().clone()).collect()
    }
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryEventRepository {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

#[async_trait]
impl EventReader for InMemoryEventRepository {
    async fn find_by_id(&self, id: &EventId) -> StoreResult<Option<Event>> {
        Ok(self.events.get(id).map(|e| e.value().clone()))
    }

    async fn find_ticket_by_event_and_customer(
        &self,
        event_id: &EventId,
        customer_id: &CustomerId,
    ) -> StoreResult<Option<Ticket>> {
        Ok(self
            .events
            .get(event_id)
            .and_then(|e| e.value().ticket_for(*customer_id).cloned()))
    }
}

#[async_trait]
impl EventWriter for InMemoryEventRepository {
    async fn save(&self, event: Event) -> StoreResult<Event> {
        let _guard = self.write_lock.lock();

        let actual = self
            .events
            .get(&event.id)
            .map(|stored| stored.version())
            .unwrap_or(0);
        if actual != event.version() {
            return Err(StoreError::StaleAggregate {
                kind: EntityKind::Event,
                id: event.id.to_string(),
                expected: event.version(),
                actual,
            });
        }

        let event = event.with_version(actual + 1);
        self.events.insert(event.id, event.clone());

        Ok(event)
    }
}

use async_trait::async_trait;

use super::StoreResult;
use crate::domain::{CustomerId, Event, EventId, Ticket};

/// Read operations for events
#[async_trait]
pub trait EventReader: Send + Sync {
    /// Get an event, with its tickets, by ID
    async fn find_by_id(&self, id: &EventId) -> StoreResult<Option<Event>>;

    /// Get the ticket a customer holds on an event, if any
    async fn find_ticket_by_event_and_customer(
        &self,
        event_id: &EventId,
        customer_id: &CustomerId,
    ) -> StoreResult<Option<Ticket>>;
}

/// Write operations for events
#[async_trait]
pub trait EventWriter: Send + Sync {
    /// Save the whole aggregate: event fields and its tickets in one write
    async fn save(&self, event: Event) -> StoreResult<Event>;
}

/// Combined repository trait
pub trait EventRepository: EventReader + EventWriter {}

// Blanket implementation
impl<T: EventReader + EventWriter> EventRepository for T {}

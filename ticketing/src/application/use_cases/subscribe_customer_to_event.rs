//! Subscribe Customer To Event Use Case
//!
//! Reserves one ticket for one customer on one event. Preconditions are
//! checked in a fixed order and the first failing one is reported:
//! 1. the customer exists
//! 2. the event exists
//! 3. the customer holds no ticket on the event yet
//! 4. the event has a free spot
//!
//! The new ticket and the capacity decrement are saved as one aggregate.
//! When another reservation lands between load and save, the event is
//! reloaded and every check after the customer lookup runs again.

use std::sync::Arc;

use crate::application::ports::{CustomerRepository, EventRepository, StoreError};
use crate::application::use_cases::TicketingError;
use crate::domain::{
    Clock, CustomerId, EntityKind, Event, EventId, Ticket, TicketStatus, Timestamp,
};

/// Loads of the event before a concurrent-modification conflict is reported
const MAX_RESERVE_ATTEMPTS: u32 = 128;

/// Command to reserve a ticket
#[derive(Debug, Clone, Copy)]
pub struct SubscribeCustomerToEventCommand {
    pub event_id: EventId,
    pub customer_id: CustomerId,
}

/// Result of a reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeCustomerToEventResult {
    pub event_id: EventId,
    pub reservation_date: Timestamp,
    pub ticket_status: TicketStatus,
}

pub struct SubscribeCustomerToEventUseCase<C, CR, ER>
where
    C: Clock,
    CR: CustomerRepository,
    ER: EventRepository,
{
    clock: Arc<C>,
    customer_repo: Arc<CR>,
    event_repo: Arc<ER>,
}

impl<C, CR, ER> SubscribeCustomerToEventUseCase<C, CR, ER>
where
    C: Clock,
    CR: CustomerRepository,
    ER: EventRepository,
{
    pub fn new(clock: Arc<C>, customer_repo: Arc<CR>, event_repo: Arc<ER>) -> Self {
        Self {
            clock,
            customer_repo,
            event_repo,
        }
    }

    pub async fn execute(
        &self,
        command: SubscribeCustomerToEventCommand,
    ) -> Result<SubscribeCustomerToEventResult, TicketingError> {
        let SubscribeCustomerToEventCommand {
            event_id,
            customer_id,
        } = command;

        let Some(customer) = self.customer_repo.find_by_id(&customer_id).await? else {
            tracing::debug!(%customer_id, %event_id, "subscription rejected: unknown customer");
            return Err(TicketingError::NotFound(EntityKind::Customer));
        };

        let mut attempt = 1;
        let (ticket, event) = loop {
            match self.reserve_once(event_id, customer.id).await {
                Err(TicketingError::Store(StoreError::StaleAggregate { actual, .. }))
                    if attempt < MAX_RESERVE_ATTEMPTS =>
                {
                    tracing::debug!(
                        %customer_id,
                        %event_id,
                        attempt,
                        actual,
                        "event changed concurrently, retrying"
                    );
                    attempt += 1;
                }
                outcome => break outcome?,
            }
        };

        tracing::info!(
            %customer_id,
            %event_id,
            ticket_id = %ticket.id,
            remaining_spots = event.total_spots(),
            "ticket reserved"
        );

        Ok(SubscribeCustomerToEventResult {
            event_id: event.id,
            reservation_date: ticket.reserved_at,
            ticket_status: ticket.status,
        })
    }

    /// Load the event, reserve on it and save it back at the loaded version
    async fn reserve_once(
        &self,
        event_id: EventId,
        customer_id: CustomerId,
    ) -> Result<(Ticket, Event), TicketingError> {
        let Some(mut event) = self.event_repo.find_by_id(&event_id).await? else {
            tracing::debug!(%customer_id, %event_id, "subscription rejected: unknown event");
            return Err(TicketingError::NotFound(EntityKind::Event));
        };

        if self
            .event_repo
            .find_ticket_by_event_and_customer(&event_id, &customer_id)
            .await?
            .is_some()
        {
            tracing::debug!(%customer_id, %event_id, "subscription rejected: already subscribed");
            return Err(TicketingError::Conflict(EntityKind::Ticket));
        }

        let ticket = event
            .reserve(customer_id, self.clock.now())
            .inspect_err(|e| {
                tracing::debug!(%customer_id, %event_id, reason = %e, "subscription rejected");
            })?;

        let event = self.event_repo.save(event).await?;

        Ok((ticket, event))
    }
}

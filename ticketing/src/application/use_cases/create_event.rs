//! Create Event Use Case
//!
//! Creates an event owned by an existing partner. Events carry no natural
//! key, so any number of identical events may exist.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::ports::{EventWriter, PartnerRepository};
use crate::application::use_cases::TicketingError;
use crate::domain::{EntityKind, Event, EventId, PartnerId};

/// Command to create an event
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub date: NaiveDate,
    pub name: String,
    pub partner_id: PartnerId,
    pub total_spots: u32,
}

/// Result of creating an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEventResult {
    pub id: EventId,
    pub date: NaiveDate,
    pub name: String,
    pub total_spots: u32,
    pub partner_id: PartnerId,
}

impl From<Event> for CreateEventResult {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            date: event.date,
            total_spots: event.total_spots(),
            partner_id: event.partner_id,
            name: event.name,
        }
    }
}

pub struct CreateEventUseCase<P, E>
where
    P: PartnerRepository,
    E: EventWriter,
{
    partner_repo: Arc<P>,
    event_repo: Arc<E>,
}

impl<P, E> CreateEventUseCase<P, E>
where
    P: PartnerRepository,
    E: EventWriter,
{
    pub fn new(partner_repo: Arc<P>, event_repo: Arc<E>) -> Self {
        Self {
            partner_repo,
            event_repo,
        }
    }

    pub async fn execute(
        &self,
        command: CreateEventCommand,
    ) -> Result<CreateEventResult, TicketingError> {
        let Some(partner) = self.partner_repo.find_by_id(&command.partner_id).await? else {
            tracing::debug!(partner_id = %command.partner_id, "event rejected: unknown partner");
            return Err(TicketingError::NotFound(EntityKind::Partner));
        };

        let event = Event::new(command.date, command.name, command.total_spots, partner.id);
        let event = self.event_repo.save(event).await?;

        tracing::info!(
            event_id = %event.id,
            partner_id = %event.partner_id,
            total_spots = event.total_spots(),
            "event created"
        );

        Ok(CreateEventResult::from(event))
    }
}

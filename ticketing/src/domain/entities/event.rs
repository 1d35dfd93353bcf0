//! Event aggregate
//!
//! An event owns its tickets. Remaining capacity and the ticket list only
//! change together, through [`Event::reserve`], and are persisted together.
//! The version is the optimistic concurrency token: a store accepts a save
//! only if the copy it holds is still at the version the caller loaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Ticket;
use crate::domain::{CustomerId, EventId, PartnerId, Timestamp};

/// Reasons an event refuses a reservation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Ticket already subscribed")]
    AlreadySubscribed,

    #[error("Event sold out")]
    SoldOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub date: NaiveDate,
    pub name: String,
    /// Owning partner (reference only)
    pub partner_id: PartnerId,
    /// Remaining capacity
    total_spots: u32,
    tickets: Vec<Ticket>,
    version: u64,
}

impl Event {
    pub fn new(
        date: NaiveDate,
        name: impl Into<String>,
        total_spots: u32,
        partner_id: PartnerId,
    ) -> Self {
        Self {
            id: EventId::new(),
            date,
            name: name.into(),
            partner_id,
            total_spots,
            tickets: Vec::new(),
            version: 0,
        }
    }

    /// Remaining capacity
    pub fn total_spots(&self) -> u32 {
        self.total_spots
    }

    /// Version of the stored copy this event was loaded from; 0 if never saved
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Stamp the version assigned by the store on save
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Tickets reserved so far, in reservation order
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn ticket_for(&self, customer_id: CustomerId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.customer_id == customer_id)
    }

    pub fn is_sold_out(&self) -> bool {
        self.total_spots == 0
    }

    /// Reserve one spot for a customer.
    ///
    /// Appends a pending ticket and takes one spot off the remaining
    /// capacity. A customer holds at most one ticket per event.
    pub fn reserve(
        &mut self,
        customer_id: CustomerId,
        reserved_at: Timestamp,
    ) -> Result<Ticket, ReservationError> {
        if self.ticket_for(customer_id).is_some() {
            return Err(ReservationError::AlreadySubscribed);
        }
        if self.is_sold_out() {
            return Err(ReservationError::SoldOut);
        }

        let ticket = Ticket::reserve(self.id, customer_id, reserved_at);

        self.tickets.push(ticket.clone());
        self.total_spots -= 1;

        Ok(ticket)
    }
}

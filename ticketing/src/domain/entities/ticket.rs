use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{CustomerId, EventId, TicketId, Timestamp};

/// Lifecycle state of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Reserved, awaiting payment
    #[default]
    Pending,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "PENDING",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One customer's reservation against one event
///
/// Tickets only exist inside their [`Event`](super::Event) aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub event_id: EventId,
    pub customer_id: CustomerId,
    pub status: TicketStatus,
    pub reserved_at: Timestamp,
}

impl Ticket {
    pub(super) fn reserve(event_id: EventId, customer_id: CustomerId, reserved_at: Timestamp) -> Self {
        Self {
            id: TicketId::new(),
            event_id,
            customer_id,
            status: TicketStatus::Pending,
            reserved_at,
        }
    }
}

mod entity_kind;
mod ids;

pub use entity_kind::EntityKind;
pub use ids::{CustomerId, EventId, PartnerId, TicketId};

/// Point in time used for reservations
pub type Timestamp = chrono::DateTime<chrono::Utc>;

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{
    Customer, CustomerKey, Event, Partner, PartnerKey, Registrable, ReservationError, Ticket,
    TicketStatus,
};
pub use services::Clock;
pub use value_objects::{CustomerId, EntityKind, EventId, PartnerId, TicketId, Timestamp};

mod customer;
mod event;
mod partner;
mod registrable;
mod ticket;

pub use customer::{Customer, CustomerKey};
pub use event::{Event, ReservationError};
pub use partner::{Partner, PartnerKey};
pub use registrable::Registrable;
pub use ticket::{Ticket, TicketStatus};

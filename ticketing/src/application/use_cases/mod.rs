mod create_customer;
mod create_event;
mod create_partner;
mod error;
mod get_customer_by_id;
mod get_partner_by_id;
mod register;
mod subscribe_customer_to_event;

#[cfg(test)]
mod test_support;

pub use create_customer::{CreateCustomerCommand, CreateCustomerResult, CreateCustomerUseCase};
pub use create_event::{CreateEventCommand, CreateEventResult, CreateEventUseCase};
pub use create_partner::{CreatePartnerCommand, CreatePartnerResult, CreatePartnerUseCase};
pub use error::{ErrorKind, TicketingError};
pub use get_customer_by_id::{CustomerView, GetCustomerByIdQuery, GetCustomerByIdUseCase};
pub use get_partner_by_id::{GetPartnerByIdQuery, GetPartnerByIdUseCase, PartnerView};
pub use subscribe_customer_to_event::{
    SubscribeCustomerToEventCommand, SubscribeCustomerToEventResult,
    SubscribeCustomerToEventUseCase,
};

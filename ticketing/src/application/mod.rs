pub mod ports;
pub mod use_cases;

pub use ports::{
    CustomerRepository, EventReader, EventRepository, EventWriter, PartnerRepository,
    RegistryReader, RegistryStore, RegistryWriter, StoreError, StoreResult,
};
pub use use_cases::{
    CreateCustomerCommand, CreateCustomerResult, CreateCustomerUseCase, CreateEventCommand,
    CreateEventResult, CreateEventUseCase, CreatePartnerCommand, CreatePartnerResult,
    CreatePartnerUseCase, CustomerView, ErrorKind, GetCustomerByIdQuery, GetCustomerByIdUseCase,
    GetPartnerByIdQuery, GetPartnerByIdUseCase, PartnerView, SubscribeCustomerToEventCommand,
    SubscribeCustomerToEventResult, SubscribeCustomerToEventUseCase, TicketingError,
};

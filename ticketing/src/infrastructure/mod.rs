pub mod clock;
pub mod config;
pub mod repositories;

pub use clock::{ManualClock, SystemClock};
pub use config::{ConfigError, CustomerSeed, EventSeed, PartnerSeed, ServerConfig, ServiceConfig};
pub use repositories::{
    InMemoryCustomerRepository, InMemoryEventRepository, InMemoryPartnerRepository,
    InMemoryRegistry,
};

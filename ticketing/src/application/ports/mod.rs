mod customer_repository;
mod error;
mod event_repository;
mod partner_repository;
mod registry;

pub use customer_repository::CustomerRepository;
pub use error::{StoreError, StoreResult};
pub use event_repository::{EventReader, EventRepository, EventWriter};
pub use partner_repository::PartnerRepository;
pub use registry::{RegistryReader, RegistryStore, RegistryWriter};

mod in_memory_event;
mod in_memory_registry;

pub use in_memory_event::InMemoryEventRepository;
pub use in_memory_registry::{
    InMemoryCustomerRepository, InMemoryPartnerRepository, InMemoryRegistry,
};

//! Ticketing Service
//!
//! Registers customers and partners, lets partners publish events and lets
//! customers reserve tickets on them.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture with clear separation of concerns:
//!
//! - **Domain**: Entities and rules (Customer, Partner, the Event/Ticket aggregate)
//! - **Application**: Use cases and port interfaces (CreateCustomer, SubscribeCustomerToEvent, etc.)
//! - **Infrastructure**: Implementations of ports (in-memory repositories, clocks, config)
//! - **Presentation**: REST API
//!
//! # Example
//!
//! ```ignore
//! use ticketing::{ServiceConfig, TicketingService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = TicketingService::new(ServiceConfig::default());
//!     service.run().await
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{
    Clock, Customer, CustomerId, EntityKind, Event, EventId, Partner, PartnerId, Ticket,
    TicketId, TicketStatus, Timestamp,
};

pub use infrastructure::{
    ConfigError, InMemoryCustomerRepository, InMemoryEventRepository, InMemoryPartnerRepository,
    ManualClock, ServiceConfig, SystemClock,
};

pub use application::{
    CreateCustomerCommand, CreateCustomerUseCase, CreateEventCommand, CreateEventUseCase,
    CreatePartnerCommand, CreatePartnerUseCase, ErrorKind, GetCustomerByIdUseCase,
    GetPartnerByIdUseCase, SubscribeCustomerToEventCommand, SubscribeCustomerToEventUseCase,
    TicketingError,
};

// Re-export port traits for integration tests
pub use application::ports::{CustomerRepository, EventRepository, PartnerRepository};

pub use presentation::{AppState, create_router};

use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

/// Errors raised while starting the service
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("seeding {what} failed: {source}")]
    Seed {
        what: String,
        #[source]
        source: TicketingError,
    },

    #[error("seed event '{event}' references unknown partner cnpj {cnpj}")]
    UnknownPartner { event: String, cnpj: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The ticketing service: repositories, clock and HTTP surface
pub struct TicketingService<C: Clock + 'static> {
    pub config: ServiceConfig,
    pub clock: Arc<C>,
    pub customer_repo: Arc<InMemoryCustomerRepository>,
    pub partner_repo: Arc<InMemoryPartnerRepository>,
    pub event_repo: Arc<InMemoryEventRepository>,
}

impl<C: Clock + 'static> TicketingService<C> {
    /// Create a new service with the given clock
    pub fn with_clock(config: ServiceConfig, clock: Arc<C>) -> Self {
        TicketingService {
            config,
            clock,
            customer_repo: Arc::new(InMemoryCustomerRepository::new()),
            partner_repo: Arc::new(InMemoryPartnerRepository::new()),
            event_repo: Arc::new(InMemoryEventRepository::new()),
        }
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        let state = Arc::new(AppState::new(
            Arc::clone(&self.clock),
            Arc::clone(&self.customer_repo),
            Arc::clone(&self.partner_repo),
            Arc::clone(&self.event_repo),
        ));

        create_router(state)
    }

    /// Register the partners, customers and events listed in the config.
    ///
    /// Goes through the regular use cases, so seed data obeys the same
    /// uniqueness rules as API traffic.
    pub async fn seed(&self) -> Result<(), BootstrapError> {
        let create_partner = CreatePartnerUseCase::new(Arc::clone(&self.partner_repo));
        for seed in &self.config.partners {
            create_partner
                .execute(CreatePartnerCommand {
                    cnpj: seed.cnpj.clone(),
                    email: seed.email.clone(),
                    name: seed.name.clone(),
                })
                .await
                .map_err(|source| BootstrapError::Seed {
                    what: format!("partner {}", seed.cnpj),
                    source,
                })?;
        }

        let create_customer = CreateCustomerUseCase::new(Arc::clone(&self.customer_repo));
        for seed in &self.config.customers {
            create_customer
                .execute(CreateCustomerCommand {
                    cpf: seed.cpf.clone(),
                    email: seed.email.clone(),
                    name: seed.name.clone(),
                })
                .await
                .map_err(|source| BootstrapError::Seed {
                    what: format!("customer {}", seed.cpf),
                    source,
                })?;
        }

        let create_event =
            CreateEventUseCase::new(Arc::clone(&self.partner_repo), Arc::clone(&self.event_repo));
        for seed in &self.config.events {
            let seed_error = |source| BootstrapError::Seed {
                what: format!("event {}", seed.name),
                source,
            };

            let partner = self
                .partner_repo
                .find_by_cnpj(&seed.partner_cnpj)
                .await
                .map_err(|e| seed_error(TicketingError::from(e)))?
                .ok_or_else(|| BootstrapError::UnknownPartner {
                    event: seed.name.clone(),
                    cnpj: seed.partner_cnpj.clone(),
                })?;

            create_event
                .execute(CreateEventCommand {
                    date: seed.date,
                    name: seed.name.clone(),
                    partner_id: partner.id,
                    total_spots: seed.total_spots,
                })
                .await
                .map_err(seed_error)?;
        }

        tracing::info!(
            partners = self.config.partners.len(),
            customers = self.config.customers.len(),
            events = self.config.events.len(),
            "seed data loaded"
        );

        Ok(())
    }

    /// Run the HTTP server until it fails
    pub async fn run(self) -> Result<(), BootstrapError> {
        let addr = self.config.bind_address();
        let router = self.rest_router();

        tracing::info!("{} listening on {}", self.config.name, addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

impl TicketingService<SystemClock> {
    /// Create a new service on the system clock
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    /// Create a service and load its seed data
    pub async fn from_config(config: ServiceConfig) -> Result<Self, BootstrapError> {
        let service = Self::new(config);
        service.seed().await?;
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{CustomerSeed, EventSeed, PartnerSeed};
    use chrono::NaiveDate;

    fn partner_seed(cnpj: &str, email: &str) -> PartnerSeed {
        PartnerSeed {
            cnpj: cnpj.to_string(),
            email: email.to_string(),
            name: "Disney".to_string(),
        }
    }

    fn event_seed(partner_cnpj: &str) -> EventSeed {
        EventSeed {
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            name: "Disney on Ice".to_string(),
            partner_cnpj: partner_cnpj.to_string(),
            total_spots: 10,
        }
    }

    #[tokio::test]
    async fn test_seed_registers_everything() {
        let config = ServiceConfig {
            partners: vec![partner_seed("41536538000100", "events@disney.com")],
            customers: vec![CustomerSeed {
                cpf: "12345678901".to_string(),
                email: "john.doe@gmail.com".to_string(),
                name: "John Doe".to_string(),
            }],
            events: vec![event_seed("41536538000100")],
            ..Default::default()
        };

        let service = TicketingService::from_config(config).await.unwrap();

        assert_eq!(service.partner_repo.len(), 1);
        assert_eq!(service.customer_repo.len(), 1);
        assert_eq!(service.event_repo.len(), 1);

        let partner = service
            .partner_repo
            .find_by_cnpj("41536538000100")
            .await
            .unwrap()
            .unwrap();
        let customer = service
            .customer_repo
            .find_by_cpf("12345678901")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(customer.name, "John Doe");

        let use_case = SubscribeCustomerToEventUseCase::new(
            Arc::clone(&service.clock),
            Arc::clone(&service.customer_repo),
            Arc::clone(&service.event_repo),
        );
        let event = service.event_repo.list().remove(0);
        assert_eq!(event.partner_id, partner.id);

        let result = use_case
            .execute(SubscribeCustomerToEventCommand {
                event_id: event.id,
                customer_id: customer.id,
            })
            .await
            .unwrap();
        assert_eq!(result.ticket_status, TicketStatus::Pending);
    }

    #[tokio::test]
    async fn test_duplicate_seed_partner_aborts() {
        let config = ServiceConfig {
            partners: vec![
                partner_seed("41536538000100", "events@disney.com"),
                partner_seed("11222333000181", "events@disney.com"),
            ],
            ..Default::default()
        };

        let err = TicketingService::from_config(config).await.err().unwrap();

        assert!(matches!(
            err,
            BootstrapError::Seed {
                source: TicketingError::AlreadyExists(EntityKind::Partner),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_seed_event_with_unknown_partner_aborts() {
        let config = ServiceConfig {
            events: vec![event_seed("99999999000199")],
            ..Default::default()
        };

        let err = TicketingService::from_config(config).await.err().unwrap();

        assert_eq!(
            err.to_string(),
            "seed event 'Disney on Ice' references unknown partner cnpj 99999999000199"
        );
    }
}

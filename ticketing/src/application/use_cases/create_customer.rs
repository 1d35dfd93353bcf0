//! Create Customer Use Case
//!
//! Registers a customer whose cpf and email are both unused.

use std::sync::Arc;

use super::register::register;
use crate::application::ports::CustomerRepository;
use crate::application::use_cases::TicketingError;
use crate::domain::{Customer, CustomerId};

/// Command to register a customer
#[derive(Debug, Clone)]
pub struct CreateCustomerCommand {
    pub cpf: String,
    pub email: String,
    pub name: String,
}

/// Result of registering a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomerResult {
    pub id: CustomerId,
    pub cpf: String,
    pub email: String,
    pub name: String,
}

impl From<Customer> for CreateCustomerResult {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            cpf: customer.cpf,
            email: customer.email,
            name: customer.name,
        }
    }
}

pub struct CreateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    customer_repo: Arc<R>,
}

impl<R> CreateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(customer_repo: Arc<R>) -> Self {
        Self { customer_repo }
    }

    pub async fn execute(
        &self,
        command: CreateCustomerCommand,
    ) -> Result<CreateCustomerResult, TicketingError> {
        let customer = Customer::new(command.cpf, command.email, command.name);

        register(self.customer_repo.as_ref(), customer)
            .await
            .map(CreateCustomerResult::from)
    }
}

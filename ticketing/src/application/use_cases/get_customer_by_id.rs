use std::sync::Arc;

use crate::application::ports::CustomerRepository;
use crate::application::use_cases::TicketingError;
use crate::domain::{Customer, CustomerId};

#[derive(Debug, Clone, Copy)]
pub struct GetCustomerByIdQuery {
    pub id: CustomerId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerView {
    pub id: CustomerId,
    pub cpf: String,
    pub email: String,
    pub name: String,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            cpf: customer.cpf,
            email: customer.email,
            name: customer.name,
        }
    }
}

pub struct GetCustomerByIdUseCase<R: CustomerRepository> {
    customer_repo: Arc<R>,
}

impl<R: CustomerRepository> GetCustomerByIdUseCase<R> {
    pub fn new(customer_repo: Arc<R>) -> Self {
        Self { customer_repo }
    }

    pub async fn execute(
        &self,
        query: GetCustomerByIdQuery,
    ) -> Result<Option<CustomerView>, TicketingError> {
        let customer = self.customer_repo.find_by_id(&query.id).await?;
        Ok(customer.map(CustomerView::from))
    }
}

use async_trait::async_trait;

use super::{RegistryStore, StoreResult};
use crate::domain::{Customer, CustomerKey};

/// Repository for registered customers
#[async_trait]
pub trait CustomerRepository: RegistryStore<Customer> {
    async fn find_by_cpf(&self, cpf: &str) -> StoreResult<Option<Customer>> {
        self.find_by_key(&CustomerKey::Cpf(cpf.to_string())).await
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
        self.find_by_key(&CustomerKey::Email(email.to_string())).await
    }
}

impl<T: RegistryStore<Customer>> CustomerRepository for T {}

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Registrable;
use crate::domain::{CustomerId, EntityKind};

/// A person who can reserve tickets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    /// Brazilian individual taxpayer number, unique across customers
    pub cpf: String,
    /// Contact e-mail, unique across customers
    pub email: String,
    pub name: String,
}

impl Customer {
    pub fn new(cpf: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            cpf: cpf.into(),
            email: email.into(),
            name: name.into(),
        }
    }
}

/// Natural keys a customer is registered under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CustomerKey {
    Cpf(String),
    Email(String),
}

impl fmt::Display for CustomerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerKey::Cpf(cpf) => write!(f, "cpf={}", cpf),
            CustomerKey::Email(email) => write!(f, "email={}", email),
        }
    }
}

impl Registrable for Customer {
    type Id = CustomerId;
    type Key = CustomerKey;

    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> CustomerId {
        self.id
    }

    fn natural_keys(&self) -> Vec<CustomerKey> {
        vec![
            CustomerKey::Cpf(self.cpf.clone()),
            CustomerKey::Email(self.email.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_is_checked_before_email() {
        let customer = Customer::new("12345678901", "john.doe@gmail.com", "John Doe");

        assert_eq!(
            customer.natural_keys(),
            vec![
                CustomerKey::Cpf("12345678901".to_string()),
                CustomerKey::Email("john.doe@gmail.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_new_customers_get_distinct_ids() {
        let a = Customer::new("12345678901", "a@gmail.com", "A");
        let b = Customer::new("12345678901", "a@gmail.com", "A");
        assert_ne!(a.id, b.id);
    }
}

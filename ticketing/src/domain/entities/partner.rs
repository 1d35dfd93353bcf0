use serde::{Deserialize, Serialize};
use std::fmt;

use super::Registrable;
use crate::domain::{EntityKind, PartnerId};

/// An organization that owns events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    /// Brazilian company registration number, unique across partners
    pub cnpj: String,
    pub email: String,
    pub name: String,
}

impl Partner {
    pub fn new(cnpj: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PartnerId::new(),
            cnpj: cnpj.into(),
            email: email.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartnerKey {
    Cnpj(String),
    Email(String),
}

impl fmt::Display for PartnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartnerKey::Cnpj(cnpj) => write!(f, "cnpj={}", cnpj),
            PartnerKey::Email(email) => write!(f, "email={}", email),
        }
    }
}

impl Registrable for Partner {
    type Id = PartnerId;
    type Key = PartnerKey;

    const KIND: EntityKind = EntityKind::Partner;

    fn id(&self) -> PartnerId {
        self.id
    }

    fn natural_keys(&self) -> Vec<PartnerKey> {
        vec![
            PartnerKey::Cnpj(self.cnpj.clone()),
            PartnerKey::Email(self.email.clone()),
        ]
    }
}

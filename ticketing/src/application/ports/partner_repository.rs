use async_trait::async_trait;

use super::{RegistryStore, StoreResult};
use crate::domain::{Partner, PartnerKey};

/// Repository for registered partners
#[async_trait]
pub trait PartnerRepository: RegistryStore<Partner> {
    async fn find_by_cnpj(&self, cnpj: &str) -> StoreResult<Option<Partner>> {
        self.find_by_key(&PartnerKey::Cnpj(cnpj.to_string())).await
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Partner>> {
        self.find_by_key(&PartnerKey::Email(email.to_string())).await
    }
}

impl<T: RegistryStore<Partner>> PartnerRepository for T {}

use std::sync::Arc;

use crate::application::ports::PartnerRepository;
use crate::application::use_cases::TicketingError;
use crate::domain::{Partner, PartnerId};

#[derive(Debug, Clone, Copy)]
pub struct GetPartnerByIdQuery {
    pub id: PartnerId,
}

/// Read projection of a partner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerView {
    pub id: PartnerId,
    pub cnpj: String,
    pub email: String,
    pub name: String,
}

impl From<Partner> for PartnerView {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            cnpj: partner.cnpj,
            email: partner.email,
            name: partner.name,
        }
    }
}

/// Looks a partner up by id; an unknown id is `None`, not an error
pub struct GetPartnerByIdUseCase<R: PartnerRepository> {
    partner_repo: Arc<R>,
}

impl<R: PartnerRepository> GetPartnerByIdUseCase<R> {
    pub fn new(partner_repo: Arc<R>) -> Self {
        Self { partner_repo }
    }

    pub async fn execute(
        &self,
        query: GetPartnerByIdQuery,
    ) -> Result<Option<PartnerView>, TicketingError> {
        let partner = self.partner_repo.find_by_id(&query.id).await?;
        Ok(partner.map(PartnerView::from))
    }
}

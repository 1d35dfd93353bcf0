//! Create Partner Use Case

use std::sync::Arc;

use super::register::register;
use crate::application::ports::PartnerRepository;
use crate::application::use_cases::TicketingError;
use crate::domain::{Partner, PartnerId};

#[derive(Debug, Clone)]
pub struct CreatePartnerCommand {
    pub cnpj: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePartnerResult {
    pub id: PartnerId,
    pub cnpj: String,
    pub email: String,
    pub name: String,
}

impl From<Partner> for CreatePartnerResult {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            cnpj: partner.cnpj,
            email: partner.email,
            name: partner.name,
        }
    }
}

/// Registers a partner whose cnpj and email are both unused
pub struct CreatePartnerUseCase<R>
where
    R: PartnerRepository,
{
    partner_repo: Arc<R>,
}

impl<R> CreatePartnerUseCase<R>
where
    R: PartnerRepository,
{
    pub fn new(partner_repo: Arc<R>) -> Self {
        Self { partner_repo }
    }

    pub async fn execute(
        &self,
        command: CreatePartnerCommand,
    ) -> Result<CreatePartnerResult, TicketingError> {
        let partner = Partner::new(command.cnpj, command.email, command.name);

        register(self.partner_repo.as_ref(), partner)
            .await
            .map(CreatePartnerResult::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryPartnerRepository;

    fn command(cnpj: &str, email: &str) -> CreatePartnerCommand {
        CreatePartnerCommand {
            cnpj: cnpj.to_string(),
            email: email.to_string(),
            name: "John Doe".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_partner() {
        let repo = Arc::new(InMemoryPartnerRepository::new());
        let use_case = CreatePartnerUseCase::new(Arc::clone(&repo));

        let result = use_case
            .execute(command("41536538000100", "john.doe@gmail.com"))
            .await
            .unwrap();

        assert_eq!(result.cnpj, "41536538000100");
        assert_eq!(result.email, "john.doe@gmail.com");
        assert_eq!(result.name, "John Doe");
        assert!(repo.find_by_cnpj("41536538000100").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_duplicated_cnpj_fails() {
        let use_case = CreatePartnerUseCase::new(Arc::new(InMemoryPartnerRepository::new()));

        use_case
            .execute(command("41536538000100", "john.doe@gmail.com"))
            .await
            .unwrap();
        let err = use_case
            .execute(command("41536538000100", "other@gmail.com"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Partner already exists");
    }

    #[tokio::test]
    async fn test_duplicated_email_fails() {
        let use_case = CreatePartnerUseCase::new(Arc::new(InMemoryPartnerRepository::new()));

        use_case
            .execute(command("41536538000100", "john.doe@gmail.com"))
            .await
            .unwrap();
        let err = use_case
            .execute(command("11222333000181", "john.doe@gmail.com"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Partner already exists");
    }
}

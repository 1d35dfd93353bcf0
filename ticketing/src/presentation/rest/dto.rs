use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::{
    CreateCustomerResult, CreateEventResult, CreatePartnerResult, CustomerView, PartnerView,
    SubscribeCustomerToEventResult,
};
use crate::domain::{CustomerId, EventId, PartnerId, TicketStatus, Timestamp};

#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub cpf: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub cpf: String,
    pub email: String,
    pub name: String,
}

impl From<CreateCustomerResult> for CustomerResponse {
    fn from(r: CreateCustomerResult) -> Self {
        Self {
            id: r.id,
            cpf: r.cpf,
            email: r.email,
            name: r.name,
        }
    }
}

impl From<CustomerView> for CustomerResponse {
    fn from(v: CustomerView) -> Self {
        Self {
            id: v.id,
            cpf: v.cpf,
            email: v.email,
            name: v.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartnerRequest {
    pub cnpj: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerResponse {
    pub id: PartnerId,
    pub cnpj: String,
    pub email: String,
    pub name: String,
}

impl From<CreatePartnerResult> for PartnerResponse {
    fn from(r: CreatePartnerResult) -> Self {
        Self {
            id: r.id,
            cnpj: r.cnpj,
            email: r.email,
            name: r.name,
        }
    }
}

impl From<PartnerView> for PartnerResponse {
    fn from(v: PartnerView) -> Self {
        Self {
            id: v.id,
            cnpj: v.cnpj,
            email: v.email,
            name: v.name,
        }
    }
}

/// Request to create an event; `date` is `YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub date: NaiveDate,
    pub name: String,
    pub partner_id: PartnerId,
    pub total_spots: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub date: NaiveDate,
    pub name: String,
    pub total_spots: u32,
    pub partner_id: PartnerId,
}

impl From<CreateEventResult> for EventResponse {
    fn from(r: CreateEventResult) -> Self {
        Self {
            id: r.id,
            date: r.date,
            name: r.name,
            total_spots: r.total_spots,
            partner_id: r.partner_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub customer_id: CustomerId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeResponse {
    pub event_id: EventId,
    pub reservation_date: Timestamp,
    pub ticket_status: TicketStatus,
}

impl From<SubscribeCustomerToEventResult> for SubscribeResponse {
    fn from(r: SubscribeCustomerToEventResult) -> Self {
        Self {
            event_id: r.event_id,
            reservation_date: r.reservation_date,
            ticket_status: r.ticket_status,
        }
    }
}

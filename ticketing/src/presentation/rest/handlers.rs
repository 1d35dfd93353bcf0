use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::application::{
    CreateCustomerCommand, CreateCustomerUseCase, CreateEventCommand, CreateEventUseCase,
    CreatePartnerCommand, CreatePartnerUseCase, GetCustomerByIdQuery, GetCustomerByIdUseCase,
    GetPartnerByIdQuery, GetPartnerByIdUseCase, SubscribeCustomerToEventCommand,
    SubscribeCustomerToEventUseCase,
};
use crate::domain::{Clock, CustomerId, EventId, PartnerId};
use crate::presentation::rest::{ApiError, ApiJson, dto::*};

use super::AppState;

/// GET /ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {})
}

/// POST /customers
pub async fn create_customer<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    ApiJson(req): ApiJson<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let use_case = CreateCustomerUseCase::new(Arc::clone(&state.customer_repo));

    let result = use_case
        .execute(CreateCustomerCommand {
            cpf: req.cpf,
            email: req.email,
            name: req.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

/// GET /customers/{id}
pub async fn get_customer<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Path(id): Path<CustomerId>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let use_case = GetCustomerByIdUseCase::new(Arc::clone(&state.customer_repo));

    use_case
        .execute(GetCustomerByIdQuery { id })
        .await?
        .map(|view| Json(view.into()))
        .ok_or_else(|| ApiError::not_found("Customer not found"))
}

/// POST /partners
pub async fn create_partner<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    ApiJson(req): ApiJson<CreatePartnerRequest>,
) -> Result<(StatusCode, Json<PartnerResponse>), ApiError> {
    let use_case = CreatePartnerUseCase::new(Arc::clone(&state.partner_repo));

    let result = use_case
        .execute(CreatePartnerCommand {
            cnpj: req.cnpj,
            email: req.email,
            name: req.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

/// GET /partners/{id}
pub async fn get_partner<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Path(id): Path<PartnerId>,
) -> Result<Json<PartnerResponse>, ApiError> {
    let use_case = GetPartnerByIdUseCase::new(Arc::clone(&state.partner_repo));

    use_case
        .execute(GetPartnerByIdQuery { id })
        .await?
        .map(|view| Json(view.into()))
        .ok_or_else(|| ApiError::not_found("Partner not found"))
}

/// POST /events
pub async fn create_event<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    ApiJson(req): ApiJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let use_case = CreateEventUseCase::new(
        Arc::clone(&state.partner_repo),
        Arc::clone(&state.event_repo),
    );

    let result = use_case
        .execute(CreateEventCommand {
            date: req.date,
            name: req.name,
            partner_id: req.partner_id,
            total_spots: req.total_spots,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

/// POST /events/{id}/subscribe
pub async fn subscribe<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Path(event_id): Path<EventId>,
    ApiJson(req): ApiJson<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, ApiError> {
    let use_case = SubscribeCustomerToEventUseCase::new(
        Arc::clone(&state.clock),
        Arc::clone(&state.customer_repo),
        Arc::clone(&state.event_repo),
    );

    let result = use_case
        .execute(SubscribeCustomerToEventCommand {
            event_id,
            customer_id: req.customer_id,
        })
        .await?;

    Ok(Json(result.into()))
}

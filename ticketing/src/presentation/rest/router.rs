use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::domain::Clock;
use crate::infrastructure::{
    InMemoryCustomerRepository, InMemoryEventRepository, InMemoryPartnerRepository,
};

/// Application state shared across handlers - uses concrete infrastructure types
pub struct AppState<C: Clock> {
    pub clock: Arc<C>,
    pub customer_repo: Arc<InMemoryCustomerRepository>,
    pub partner_repo: Arc<InMemoryPartnerRepository>,
    pub event_repo: Arc<InMemoryEventRepository>,
}

impl<C: Clock> AppState<C> {
    pub fn new(
        clock: Arc<C>,
        customer_repo: Arc<InMemoryCustomerRepository>,
        partner_repo: Arc<InMemoryPartnerRepository>,
        event_repo: Arc<InMemoryEventRepository>,
    ) -> Self {
        AppState {
            clock,
            customer_repo,
            partner_repo,
            event_repo,
        }
    }
}

/// Create the REST API router
pub fn create_router<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/customers", post(handlers::create_customer::<C>))
        .route("/customers/{id}", get(handlers::get_customer::<C>))
        .route("/partners", post(handlers::create_partner::<C>))
        .route("/partners/{id}", get(handlers::get_partner::<C>))
        .route("/events", post(handlers::create_event::<C>))
        .route("/events/{id}/subscribe", post(handlers::subscribe::<C>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

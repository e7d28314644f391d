use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::booking::{Catalog, Orders};

use crate::openapi;

pub mod orders;
pub mod services;

/// Shared handler state: the two stores, constructed once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<Catalog>,
    pub orders: Arc<Orders>,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service healthy"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: booking API, health, and swagger docs
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/services", get(services::list).post(services::create))
        .route(
            "/services/:id",
            get(services::get).put(services::update).delete(services::delete),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/:id", get(orders::get).put(orders::update_status))
        .with_state(state);

    // Compose
    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

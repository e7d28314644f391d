use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::{NewOrder, Order, OrderStatus};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateOrderStatusInput {
    pub status: OrderStatus,
}

#[utoipa::path(
    get, path = "/orders", tag = "orders",
    responses((status = 200, description = "List OK", body = [crate::openapi::OrderDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Order>> {
    let orders = state.orders.list().await;
    info!(count = orders.len(), "list orders");
    Json(orders)
}

#[utoipa::path(
    post, path = "/orders", tag = "orders",
    request_body = crate::openapi::NewOrderDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::OrderDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Service Not Found")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewOrder>,
) -> Result<Json<Order>, JsonApiError> {
    match state.orders.create(input).await {
        Ok(created) => {
            info!(id = created.id, service_id = created.service_id, "created order");
            Ok(Json(created))
        }
        Err(e) => match e {
            service::errors::ServiceError::Validation(_) | service::errors::ServiceError::Model(_) => {
                Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())))
            }
            service::errors::ServiceError::NotFound(_) => {
                Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())))
            }
            _ => {
                error!(err = %e, "create order failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
            }
        },
    }
}

#[utoipa::path(
    get, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::OrderDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Order>, StatusCode> {
    match state.orders.get(id).await {
        Some(order) => Ok(Json(order)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

#[utoipa::path(
    put, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = crate::openapi::UpdateOrderStatusDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::OrderDoc),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Order Already Closed")
    )
)]
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateOrderStatusInput>,
) -> Result<Json<Order>, JsonApiError> {
    match state.orders.update_status(id, input.status).await {
        Ok(updated) => {
            info!(id = updated.id, status = %updated.status, "updated order status");
            Ok(Json(updated))
        }
        Err(e) => match e {
            service::errors::ServiceError::NotFound(_) => {
                Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())))
            }
            service::errors::ServiceError::InvalidTransition { .. } => {
                Err(JsonApiError::new(StatusCode::CONFLICT, "Order Already Closed", Some(e.to_string())))
            }
            _ => {
                error!(err = %e, "update order status failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", Some(e.to_string())))
            }
        },
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::{NewService, Service, ServicePatch};
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/services", tag = "services",
    responses((status = 200, description = "List OK", body = [crate::openapi::ServiceDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Service>> {
    let services = state.catalog.list().await;
    info!(count = services.len(), "list services");
    Json(services)
}

#[utoipa::path(
    post, path = "/services", tag = "services",
    request_body = crate::openapi::NewServiceDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewService>,
) -> Result<Json<Service>, JsonApiError> {
    match state.catalog.create(input).await {
        Ok(created) => {
            info!(id = created.id, name = %created.name, "created service");
            Ok(Json(created))
        }
        Err(e) => match e {
            service::errors::ServiceError::Validation(_) | service::errors::ServiceError::Model(_) => {
                Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())))
            }
            _ => {
                error!(err = %e, "create service failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
            }
        },
    }
}

#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = i64, Path, description = "Service ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Service>, StatusCode> {
    match state.catalog.get(id).await {
        Some(svc) => Ok(Json(svc)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

#[utoipa::path(
    put, path = "/services/{id}", tag = "services",
    params(("id" = i64, Path, description = "Service ID")),
    request_body = crate::openapi::ServicePatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(patch): Json<ServicePatch>,
) -> Result<Json<Service>, JsonApiError> {
    match state.catalog.update(id, patch).await {
        Ok(updated) => {
            info!(id = updated.id, "updated service");
            Ok(Json(updated))
        }
        Err(e) => match e {
            service::errors::ServiceError::Validation(_) | service::errors::ServiceError::Model(_) => {
                Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())))
            }
            service::errors::ServiceError::NotFound(_) => {
                Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())))
            }
            _ => {
                error!(err = %e, "update service failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", Some(e.to_string())))
            }
        },
    }
}

#[utoipa::path(
    delete, path = "/services/{id}", tag = "services",
    params(("id" = i64, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> StatusCode {
    match state.catalog.delete(id).await {
        Ok(id) => {
            info!(id, "deleted service");
            StatusCode::NO_CONTENT
        }
        Err(service::errors::ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
        Err(e) => {
            error!(err = %e, "delete service failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct ServiceDoc {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub img: String,
    pub duration: i64,
    pub description: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct NewServiceDoc {
    pub name: String,
    pub price: f64,
    pub img: String,
    pub duration: i64,
    pub description: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct ServicePatchDoc {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub img: Option<String>,
    pub duration: Option<i64>,
    pub description: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct OrderDoc {
    pub id: i64,
    pub service_id: i64,
    pub service_name: String,
    pub user_id: i64,
    pub date: String,
    pub status: String,
    pub created_at: String,
    pub notes: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct NewOrderDoc {
    pub service_id: i64,
    pub date: String,
    pub notes: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateOrderStatusDoc {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::services::list,
        crate::routes::services::create,
        crate::routes::services::get,
        crate::routes::services::update,
        crate::routes::services::delete,
        crate::routes::orders::list,
        crate::routes::orders::create,
        crate::routes::orders::get,
        crate::routes::orders::update_status,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceDoc,
            NewServiceDoc,
            ServicePatchDoc,
            OrderDoc,
            NewOrderDoc,
            UpdateOrderStatusDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "services"),
        (name = "orders")
    )
)]
pub struct ApiDoc;

use actix_web::{get, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiRootResponse {
    #[schema(example = "Portfolio API is running!")]
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/",
    tag = "portfolio",
    responses(
        (status = 200, description = "API is up", body = ApiRootResponse)
    )
)]
#[get("/api/")]
pub async fn api_root_handler() -> impl Responder {
    HttpResponse::Ok().json(ApiRootResponse {
        message: "Portfolio API is running!".to_string(),
        timestamp: Utc::now(),
    })
}

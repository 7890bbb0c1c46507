use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::modules::portfolio::application::data_provider::LoadState;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    portfolio: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Ready only once the portfolio has loaded
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let load_state: LoadState = data.portfolio.get_portfolio.execute().await.into();
    let portfolio = load_state.label();

    match load_state {
        LoadState::Ready(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            portfolio,
        }),
        _ => HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            portfolio,
        }),
    }
}

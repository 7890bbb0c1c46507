pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::portfolio;
pub use modules::site;

use crate::api::openapi::ApiDoc;
use crate::portfolio::adapter::outgoing::{HttpPortfolioSource, StaticPortfolioSource};
use crate::portfolio::application::data_provider::DataProvider;
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::outgoing::PortfolioSource;
use crate::portfolio::application::service::{GetPortfolioService, GetSingleProjectService};
use crate::shared::api::custom_form_config;
use crate::shared::config::{load_env_files, AppConfig};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
}

/// Remote backend when `BACKEND_URL` is set, the embedded document otherwise.
pub fn portfolio_source(config: &AppConfig) -> Arc<dyn PortfolioSource> {
    match &config.backend_url {
        Some(url) => Arc::new(HttpPortfolioSource::new(url.as_str())),
        None => Arc::new(StaticPortfolioSource::embedded()),
    }
}

pub fn portfolio_use_cases(provider: Arc<DataProvider>) -> PortfolioUseCases {
    PortfolioUseCases {
        get_portfolio: Arc::new(GetPortfolioService::new(Arc::clone(&provider))),
        get_single_project: Arc::new(GetSingleProjectService::new(GetPortfolioService::new(
            provider,
        ))),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Environment first so RUST_LOG from the file applies
    let env_file = load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");
    if let Some(file) = env_file {
        info!("Loaded environment from {}", file);
    }

    let config = AppConfig::from_env()?;
    info!(
        environment = %config.environment,
        backend = config.backend_url.as_ref().map(|u| u.as_str()).unwrap_or("embedded"),
        "Configuration loaded"
    );

    let provider = Arc::new(DataProvider::new(portfolio_source(&config)));
    provider.load();

    let state = AppState {
        portfolio: portfolio_use_cases(Arc::clone(&provider)),
    };
    let openapi = ApiDoc::openapi();

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_form_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio API
    cfg.service(crate::portfolio::adapter::incoming::web::routes::api_root_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_single_project_handler);
    // Site
    cfg.service(crate::site::adapter::incoming::web::routes::index_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

use actix_web::{get, http::header::ContentType, http::StatusCode, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{debug, error};

use crate::modules::portfolio::application::data_provider::LoadState;
use crate::modules::site::adapter::incoming::web::shell::ApplicationShell;
use crate::modules::site::application::page_state::PageState;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    /// Id of the project whose detail overlay is open.
    pub project: Option<String>,
}

/// Renders the shell as an HTML response. A failed load is served as 503.
pub fn render_page(load_state: &LoadState, page: &PageState) -> HttpResponse {
    match ApplicationShell::render(load_state, page) {
        Ok(html) => {
            let status = match load_state {
                LoadState::Failed(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::OK,
            };
            HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(html)
        }
        Err(err) => {
            error!("Failed to render page: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[get("/")]
pub async fn index_handler(
    query: web::Query<IndexQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let load_state: LoadState = data.portfolio.get_portfolio.execute().await.into();
    let mut page = PageState::new();

    if let (Some(raw), Some(portfolio)) = (query.project.as_deref(), load_state.data()) {
        let selected = raw
            .parse::<u32>()
            .map(|id| page.selection.select_by_id(portfolio, id))
            .unwrap_or(false);
        if !selected {
            debug!("Ignoring unknown project selection {:?}", raw);
        }
    }

    render_page(&load_state, &page)
}

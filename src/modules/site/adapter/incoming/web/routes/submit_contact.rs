use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::modules::portfolio::application::data_provider::LoadState;
use crate::modules::site::adapter::incoming::web::routes::render_page;
use crate::modules::site::application::page_state::PageState;
use crate::modules::site::domain::contact_form::ContactField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Mock submission: validates, shows the confirmation toast and clears the
/// form. Nothing is stored or sent. A rejected submit re-renders with the
/// entered values kept.
#[post("/contact")]
pub async fn submit_contact_handler(
    form: web::Form<ContactSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    let load_state: LoadState = data.portfolio.get_portfolio.execute().await.into();
    let page = apply_submission(&load_state, form.into_inner());

    render_page(&load_state, &page)
}

/// Replays the submission into a fresh page. The contact section only exists
/// once the portfolio is ready, so nothing is submitted before that.
pub fn apply_submission(load_state: &LoadState, submission: ContactSubmission) -> PageState {
    let mut page = PageState::new();

    if load_state.data().is_none() {
        debug!(state = load_state.label(), "Ignoring contact submission, page not ready");
        return page;
    }

    page.contact_form.update(ContactField::Name, submission.name);
    page.contact_form.update(ContactField::Email, submission.email);
    page.contact_form.update(ContactField::Message, submission.message);

    if let Err(err) = page.contact_form.submit(&mut page.toaster) {
        warn!("Contact form rejected: {}", err);
    }

    page
}

use std::collections::HashMap;

use askama::Template;
use chrono::{Datelike, Utc};
use tracing::debug;

use crate::modules::portfolio::application::data_provider::LoadState;
use crate::modules::portfolio::domain::entities::PortfolioData;
use crate::modules::site::adapter::incoming::web::views::{
    AboutView, ContactView, EducationCard, EducationView, ErrorView, FooterView, HeroView,
    LoadingView, NavLink, NavbarView, PageView, ProjectCard, ProjectsView, Reveal,
    TechCategory, TechStackView, ToasterView, EDUCATION_STAGGER_MS,
};
use crate::modules::site::application::page_state::PageState;
use crate::modules::site::domain::contact_form::ContactField;
use crate::modules::site::domain::section::SectionKind;
use crate::modules::site::domain::visibility::{VisibilityController, Viewport};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

/// Top-level page. Picks exactly one of the loading indicator, the error
/// notice, or the full section sequence from the load state.
pub struct ApplicationShell;

impl ApplicationShell {
    pub fn render(load_state: &LoadState, page: &PageState) -> Result<String, RenderError> {
        let state = load_state.label();

        match load_state {
            LoadState::Loading => Ok(LoadingView {
                title: "Portfolio",
                state,
            }
            .render()?),

            LoadState::Failed(message) => Ok(ErrorView {
                title: "Portfolio",
                state,
                message,
            }
            .render()?),

            LoadState::Ready(data) => {
                let sections = Self::render_sections(data, page)?;
                Ok(PageView {
                    title: &data.personal.name,
                    state,
                    sections,
                }
                .render()?)
            }
        }
    }

    fn render_sections(data: &PortfolioData, page: &PageState) -> Result<Vec<String>, RenderError> {
        // Mounted for the lifetime of this render; dropping them releases
        // their viewport registrations. Nothing intersects a server render,
        // so every latched section goes out NotVisible and the page script
        // latches it in the browser.
        let viewport = Viewport::new();
        let controllers: HashMap<SectionKind, VisibilityController> = SectionKind::ORDER
            .iter()
            .filter_map(|kind| {
                VisibilityController::for_section(&viewport, *kind).map(|c| (*kind, c))
            })
            .collect();
        debug!(observers = viewport.observer_count(), "Section controllers mounted");

        let reveal = |kind: SectionKind| {
            controllers
                .get(&kind)
                .map(Reveal::from)
                .unwrap_or_default()
        };

        let mut sections = Vec::with_capacity(SectionKind::ORDER.len() + 1);
        for kind in SectionKind::ORDER {
            sections.push(Self::render_section(kind, data, page, reveal(kind))?);
        }
        sections.push(
            ToasterView {
                toasts: page.toaster.toasts(),
            }
            .render()?,
        );

        Ok(sections)
    }

    fn render_section(
        kind: SectionKind,
        data: &PortfolioData,
        page: &PageState,
        reveal: Reveal,
    ) -> Result<String, askama::Error> {
        match kind {
            SectionKind::Navbar => NavbarView {
                name: &data.personal.name,
                links: NavLink::all(),
            }
            .render(),

            SectionKind::Hero => HeroView {
                personal: &data.personal,
                current_title: page.hero_titles.current(),
                titles: page.hero_titles.titles().join("|"),
                interval_ms: page.hero_titles.interval().as_millis(),
            }
            .render(),

            SectionKind::About => AboutView {
                personal: &data.personal,
                reveal,
            }
            .render(),

            SectionKind::Projects => ProjectsView {
                cards: data
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| ProjectCard::new(index, project))
                    .collect(),
                selected: page.selection.selected(),
                github: &data.contact.github,
                reveal,
            }
            .render(),

            SectionKind::TechStack => TechStackView {
                categories: data
                    .tech_stack
                    .categories()
                    .into_iter()
                    .map(|(title, items)| TechCategory { title, items })
                    .collect(),
                reveal,
            }
            .render(),

            SectionKind::Education => EducationView {
                entries: data
                    .education
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| EducationCard {
                        entry,
                        delay_ms: index * EDUCATION_STAGGER_MS,
                    })
                    .collect(),
                reveal,
            }
            .render(),

            SectionKind::Contact => ContactView {
                contact: &data.contact,
                mailto: data.contact.mailto(),
                location: &data.personal.location,
                name: page.contact_form.value(ContactField::Name),
                email: page.contact_form.value(ContactField::Email),
                message: page.contact_form.value(ContactField::Message),
                reveal,
            }
            .render(),

            SectionKind::Footer => FooterView {
                name: &data.personal.name,
                title: &data.personal.title,
                links: NavLink::all(),
                contact: &data.contact,
                mailto: data.contact.mailto(),
                year: Utc::now().year(),
            }
            .render(),
        }
    }
}

use crate::modules::site::domain::contact_form::ContactForm;
use crate::modules::site::domain::notifications::Toaster;
use crate::modules::site::domain::selection::ProjectSelection;
use crate::modules::site::domain::title_rotator::TitleRotator;

/// Transient UI state for one render. Never part of `PortfolioData`.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub selection: ProjectSelection,
    pub contact_form: ContactForm,
    pub toaster: Toaster,
    pub hero_titles: TitleRotator,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }
}

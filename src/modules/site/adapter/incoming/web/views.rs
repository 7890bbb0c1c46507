use askama::Template;

use crate::modules::portfolio::domain::entities::{
    ContactInfo, EducationEntry, PersonalInfo, Project,
};
use crate::modules::site::domain::notifications::Toast;
use crate::modules::site::domain::section::SectionKind;
use crate::modules::site::domain::visibility::{Threshold, VisibilityController};

pub const PROJECT_STAGGER_MS: usize = 150;
pub const EDUCATION_STAGGER_MS: usize = 200;

/// Scroll-reveal attributes for a latched section root, taken from its
/// controller's current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub visible: bool,
    pub threshold: f64,
}

impl Reveal {
    pub fn class(&self) -> &'static str {
        if self.visible {
            "reveal is-visible"
        } else {
            "reveal"
        }
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            visible: false,
            threshold: Threshold::DEFAULT.value(),
        }
    }
}

impl From<&VisibilityController> for Reveal {
    fn from(controller: &VisibilityController) -> Self {
        Self {
            visible: controller.is_visible(),
            threshold: controller.threshold().value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn all() -> Vec<NavLink> {
        SectionKind::navigation()
            .into_iter()
            .map(|(id, label)| NavLink { id, label })
            .collect()
    }
}

//
// ──────────────────────────────────────────────────────────
// Page frames
// ──────────────────────────────────────────────────────────
//

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageView<'a> {
    pub title: &'a str,
    pub state: &'static str,
    pub sections: Vec<String>,
}

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingView {
    pub title: &'static str,
    pub state: &'static str,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView<'a> {
    pub title: &'static str,
    pub state: &'static str,
    pub message: &'a str,
}

//
// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────
//

#[derive(Template)]
#[template(path = "sections/navbar.html")]
pub struct NavbarView<'a> {
    pub name: &'a str,
    pub links: Vec<NavLink>,
}

#[derive(Template)]
#[template(path = "sections/hero.html")]
pub struct HeroView<'a> {
    pub personal: &'a PersonalInfo,
    pub current_title: &'a str,
    pub titles: String,
    pub interval_ms: u128,
}

#[derive(Template)]
#[template(path = "sections/about.html")]
pub struct AboutView<'a> {
    pub personal: &'a PersonalInfo,
    pub reveal: Reveal,
}

pub struct ProjectCard<'a> {
    pub project: &'a Project,
    pub preview: &'a [String],
    pub hidden: usize,
    pub delay_ms: usize,
}

impl<'a> ProjectCard<'a> {
    pub fn new(index: usize, project: &'a Project) -> Self {
        Self {
            project,
            preview: project.preview_technologies(),
            hidden: project.hidden_technology_count(),
            delay_ms: index * PROJECT_STAGGER_MS,
        }
    }
}

#[derive(Template)]
#[template(path = "sections/projects.html")]
pub struct ProjectsView<'a> {
    pub cards: Vec<ProjectCard<'a>>,
    pub selected: Option<&'a Project>,
    pub github: &'a str,
    pub reveal: Reveal,
}

pub struct TechCategory<'a> {
    pub title: &'static str,
    pub items: &'a [String],
}

#[derive(Template)]
#[template(path = "sections/tech_stack.html")]
pub struct TechStackView<'a> {
    pub categories: Vec<TechCategory<'a>>,
    pub reveal: Reveal,
}

pub struct EducationCard<'a> {
    pub entry: &'a EducationEntry,
    pub delay_ms: usize,
}

#[derive(Template)]
#[template(path = "sections/education.html")]
pub struct EducationView<'a> {
    pub entries: Vec<EducationCard<'a>>,
    pub reveal: Reveal,
}

#[derive(Template)]
#[template(path = "sections/contact.html")]
pub struct ContactView<'a> {
    pub contact: &'a ContactInfo,
    pub mailto: String,
    pub location: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub reveal: Reveal,
}

#[derive(Template)]
#[template(path = "sections/footer.html")]
pub struct FooterView<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub links: Vec<NavLink>,
    pub contact: &'a ContactInfo,
    pub mailto: String,
    pub year: i32,
}

#[derive(Template)]
#[template(path = "sections/toaster.html")]
pub struct ToasterView<'a> {
    pub toasts: &'a [Toast],
}

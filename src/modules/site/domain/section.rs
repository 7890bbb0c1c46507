use crate::modules::site::domain::visibility::Threshold;

/// The fixed building blocks of the page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Navbar,
    Hero,
    About,
    Projects,
    TechStack,
    Education,
    Contact,
    Footer,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 8] = [
        SectionKind::Navbar,
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Projects,
        SectionKind::TechStack,
        SectionKind::Education,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    /// Value of the `data-section` attribute on the section root.
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Navbar => "navbar",
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Projects => "projects",
            SectionKind::TechStack => "tech-stack",
            SectionKind::Education => "education",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
        }
    }

    /// Element id used for in-page navigation, if the section has one.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            SectionKind::About
            | SectionKind::Projects
            | SectionKind::TechStack
            | SectionKind::Education
            | SectionKind::Contact => Some(self.name()),
            _ => None,
        }
    }

    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            SectionKind::About => Some("About"),
            SectionKind::Projects => Some("Projects"),
            SectionKind::TechStack => Some("Tech Stack"),
            SectionKind::Education => Some("Education"),
            SectionKind::Contact => Some("Contact"),
            _ => None,
        }
    }

    /// Sections that reveal on scroll. Navbar, Hero and Footer are visible
    /// from the start.
    pub fn reveal_threshold(self) -> Option<Threshold> {
        match self {
            SectionKind::Projects => Some(Threshold::PROJECTS),
            SectionKind::About
            | SectionKind::TechStack
            | SectionKind::Education
            | SectionKind::Contact => Some(Threshold::DEFAULT),
            _ => None,
        }
    }

    /// Anchored sections in order, as (id, label) pairs for navigation.
    pub fn navigation() -> Vec<(&'static str, &'static str)> {
        Self::ORDER
            .iter()
            .filter_map(|kind| Some((kind.anchor()?, kind.nav_label()?)))
            .collect()
    }
}

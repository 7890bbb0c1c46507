use std::collections::HashSet;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of technology badges shown on a project card before collapsing
/// the rest into a "+N more" badge.
pub const CARD_TECHNOLOGY_PREVIEW: usize = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[schema(example = "Nishant Kumar Dwivedi")]
    pub name: String,
    #[schema(example = "Full Stack Developer")]
    pub title: String,
    #[schema(example = "India")]
    pub location: String,
    pub bio: String,
    pub profile_image: String,
    pub hero_background: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "WeChat")]
    pub name: String,
    /// Short description shown on the card
    pub description: String,
    /// Long description shown in the detail overlay
    pub details: String,
    pub technologies: Vec<String>,
    pub live_link: String,
    pub github_link: String,
    pub image: String,
    pub featured: bool,
}

impl Project {
    pub fn preview_technologies(&self) -> &[String] {
        let end = self.technologies.len().min(CARD_TECHNOLOGY_PREVIEW);
        &self.technologies[..end]
    }

    pub fn hidden_technology_count(&self) -> usize {
        self.technologies
            .len()
            .saturating_sub(CARD_TECHNOLOGY_PREVIEW)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: u32,
    pub degree: String,
    pub institution: String,
    #[schema(example = "2026")]
    pub graduation_year: String,
    #[schema(example = "Currently Pursuing")]
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TechStack {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub databases: Vec<String>,
}

impl TechStack {
    /// The four categories in display order.
    pub fn categories(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Languages", self.languages.as_slice()),
            ("Frameworks & Libraries", self.frameworks.as_slice()),
            ("Tools & Technologies", self.tools.as_slice()),
            ("Databases", self.databases.as_slice()),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ContactInfo {
    #[schema(example = "someone@example.com")]
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// The aggregate every section renders from. Constructed once per load and
/// shared read-only afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal: PersonalInfo,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    pub tech_stack: TechStack,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioValidationError {
    #[error("Field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("Duplicate project id {0}")]
    DuplicateProjectId(u32),

    #[error("Project {0} lists no technologies")]
    EmptyTechnologies(u32),

    #[error("Duplicate education id {0}")]
    DuplicateEducationId(u32),

    #[error("Invalid contact email: {0}")]
    InvalidEmail(String),
}

impl PortfolioData {
    pub fn find_project(&self, project_id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Checks the invariants a section relies on. Sections never null-check,
    /// so data failing here must not reach them.
    pub fn validate(&self) -> Result<(), PortfolioValidationError> {
        let personal = [
            ("personal.name", &self.personal.name),
            ("personal.title", &self.personal.title),
            ("personal.location", &self.personal.location),
            ("personal.bio", &self.personal.bio),
            ("personal.profileImage", &self.personal.profile_image),
            ("personal.heroBackground", &self.personal.hero_background),
            ("contact.linkedin", &self.contact.linkedin),
            ("contact.github", &self.contact.github),
        ];
        for (field, value) in personal {
            if value.trim().is_empty() {
                return Err(PortfolioValidationError::EmptyField(field));
            }
        }

        if !EmailAddress::is_valid(&self.contact.email) {
            return Err(PortfolioValidationError::InvalidEmail(
                self.contact.email.clone(),
            ));
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id) {
                return Err(PortfolioValidationError::DuplicateProjectId(project.id));
            }
            if project.technologies.is_empty() {
                return Err(PortfolioValidationError::EmptyTechnologies(project.id));
            }
        }

        let mut education_ids = HashSet::new();
        for entry in &self.education {
            if !education_ids.insert(entry.id) {
                return Err(PortfolioValidationError::DuplicateEducationId(entry.id));
            }
        }

        Ok(())
    }
}

use crate::modules::portfolio::domain::entities::{PortfolioData, Project};

/// The project shown in the detail overlay. Holds at most one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    selected: Option<Project>,
}

impl ProjectSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous selection.
    pub fn select(&mut self, project: Project) {
        self.selected = Some(project);
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Selects by id. An unknown id leaves the selection untouched and
    /// returns false.
    pub fn select_by_id(&mut self, data: &PortfolioData, project_id: u32) -> bool {
        match data.find_project(project_id) {
            Some(project) => {
                self.select(project.clone());
                true
            }
            None => false,
        }
    }
}

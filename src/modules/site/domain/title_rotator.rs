use std::time::Duration;

pub const HERO_TITLES: [&str; 4] = [
    "Full Stack Developer",
    "Problem Solver",
    "Code Architect",
    "Innovation Driver",
];

pub const TITLE_ROTATION_INTERVAL: Duration = Duration::from_secs(3);

/// Cycles through the hero titles, wrapping at the end. The page script runs
/// the same cycle from `titles()` and `interval()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRotator {
    titles: Vec<String>,
    index: usize,
}

impl TitleRotator {
    pub fn current(&self) -> &str {
        &self.titles[self.index]
    }

    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.titles.len();
        self.current()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn interval(&self) -> Duration {
        TITLE_ROTATION_INTERVAL
    }
}

impl Default for TitleRotator {
    fn default() -> Self {
        Self {
            titles: HERO_TITLES.iter().map(|t| t.to_string()).collect(),
            index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_title() {
        assert_eq!(TitleRotator::default().current(), "Full Stack Developer");
    }

    #[test]
    fn advance_wraps_around() {
        let mut rotator = TitleRotator::default();

        assert_eq!(rotator.advance(), "Problem Solver");
        assert_eq!(rotator.advance(), "Code Architect");
        assert_eq!(rotator.advance(), "Innovation Driver");
        assert_eq!(rotator.advance(), "Full Stack Developer");
    }

    #[test]
    fn page_script_gets_every_title_and_the_interval() {
        let rotator = TitleRotator::default();

        assert_eq!(rotator.titles().len(), HERO_TITLES.len());
        assert_eq!(rotator.interval().as_millis(), 3000);
    }
}

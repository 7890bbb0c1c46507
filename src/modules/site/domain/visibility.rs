use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::modules::site::domain::section::SectionKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    #[error("Visibility threshold {0} is outside (0, 1]")]
    OutOfRange(f64),
}

/// Fraction of a section that must intersect the viewport before it reveals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.3);
    pub const PROJECTS: Threshold = Threshold(0.2);

    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        // NaN fails both comparisons
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(ThresholdError::OutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    NotVisible,
    Visible,
}

/// One-shot `NotVisible -> Visible` latch.
#[derive(Debug, Clone)]
pub struct VisibilityLatch {
    threshold: Threshold,
    state: Visibility,
}

impl VisibilityLatch {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: Visibility::NotVisible,
        }
    }

    /// Feeds one intersection event. Returns true only for the event that
    /// flips the latch; everything after that is ignored.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state == Visibility::Visible
            || ratio.is_nan()
            || ratio < self.threshold.value()
        {
            return false;
        }
        self.state = Visibility::Visible;
        true
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}

struct Registration {
    section: SectionKind,
    latch: Weak<RefCell<VisibilityLatch>>,
}

#[derive(Default)]
struct Registry {
    next_id: Cell<u64>,
    observers: RefCell<BTreeMap<u64, Registration>>,
}

/// The observation platform sections register with. Intersection events are
/// delivered per section to every live registration.
#[derive(Clone, Default)]
pub struct Viewport {
    registry: Rc<Registry>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports that `section` intersects the viewport by `ratio`. Returns the
    /// number of controllers that became visible because of it.
    pub fn intersect(&self, section: SectionKind, ratio: f64) -> usize {
        let latches: Vec<_> = self
            .registry
            .observers
            .borrow()
            .values()
            .filter(|r| r.section == section)
            .filter_map(|r| r.latch.upgrade())
            .collect();

        latches
            .iter()
            .filter(|latch| latch.borrow_mut().observe(ratio))
            .count()
    }

    pub fn observer_count(&self) -> usize {
        self.registry.observers.borrow().len()
    }

    fn register(&self, section: SectionKind, latch: &Rc<RefCell<VisibilityLatch>>) -> u64 {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        self.registry.observers.borrow_mut().insert(
            id,
            Registration {
                section,
                latch: Rc::downgrade(latch),
            },
        );
        id
    }
}

/// Scroll-reveal state for one section. Registers with the viewport on mount
/// and unregisters on drop.
pub struct VisibilityController {
    section: SectionKind,
    latch: Rc<RefCell<VisibilityLatch>>,
    registry: Weak<Registry>,
    id: u64,
}

impl VisibilityController {
    pub fn mount(viewport: &Viewport, section: SectionKind, threshold: Threshold) -> Self {
        let latch = Rc::new(RefCell::new(VisibilityLatch::new(threshold)));
        let id = viewport.register(section, &latch);
        Self {
            section,
            latch,
            registry: Rc::downgrade(&viewport.registry),
            id,
        }
    }

    /// Mounts with the section's own threshold, or `None` for sections that
    /// never latch.
    pub fn for_section(viewport: &Viewport, section: SectionKind) -> Option<Self> {
        section
            .reveal_threshold()
            .map(|threshold| Self::mount(viewport, section, threshold))
    }

    pub fn section(&self) -> SectionKind {
        self.section
    }

    pub fn threshold(&self) -> Threshold {
        self.latch.borrow().threshold()
    }

    pub fn visibility(&self) -> Visibility {
        self.latch.borrow().state()
    }

    pub fn is_visible(&self) -> bool {
        self.latch.borrow().is_visible()
    }
}

impl Drop for VisibilityController {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.observers.borrow_mut().remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_accepts_unit_interval() {
        assert!(Threshold::new(1.0).is_ok());
        assert!(Threshold::new(0.01).is_ok());
    }

    #[test]
    fn threshold_rejects_out_of_range() {
        assert_eq!(Threshold::new(0.0), Err(ThresholdError::OutOfRange(0.0)));
        assert!(Threshold::new(-0.5).is_err());
        assert!(Threshold::new(1.5).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn latch_flips_once_and_stays_visible() {
        let mut latch = VisibilityLatch::new(Threshold::DEFAULT);

        assert!(!latch.observe(0.1));
        assert!(!latch.observe(f64::NAN));
        assert_eq!(latch.state(), Visibility::NotVisible);

        assert!(latch.observe(0.5));
        assert!(latch.is_visible());

        assert!(!latch.observe(0.0));
        assert!(!latch.observe(1.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn latch_flips_at_exact_threshold() {
        let mut latch = VisibilityLatch::new(Threshold::PROJECTS);

        assert!(latch.observe(0.2));
    }

    #[test]
    fn controller_reveals_through_viewport() {
        let viewport = Viewport::new();
        let about = VisibilityController::mount(&viewport, SectionKind::About, Threshold::DEFAULT);

        assert!(!about.is_visible());

        assert_eq!(viewport.intersect(SectionKind::About, 0.5), 1);
        assert!(about.is_visible());

        assert_eq!(viewport.intersect(SectionKind::About, 0.0), 0);
        assert_eq!(about.visibility(), Visibility::Visible);
    }

    #[test]
    fn events_only_reach_their_section() {
        let viewport = Viewport::new();
        let about = VisibilityController::mount(&viewport, SectionKind::About, Threshold::DEFAULT);
        let projects =
            VisibilityController::mount(&viewport, SectionKind::Projects, Threshold::PROJECTS);

        viewport.intersect(SectionKind::Projects, 0.25);

        assert!(projects.is_visible());
        assert!(!about.is_visible());
    }

    #[test]
    fn registration_is_released_on_drop() {
        let viewport = Viewport::new();
        let about = VisibilityController::mount(&viewport, SectionKind::About, Threshold::DEFAULT);
        let contact = VisibilityController::for_section(&viewport, SectionKind::Contact).unwrap();
        assert_eq!(viewport.observer_count(), 2);

        drop(about);
        assert_eq!(viewport.observer_count(), 1);

        drop(contact);
        assert_eq!(viewport.observer_count(), 0);
        assert_eq!(viewport.intersect(SectionKind::About, 1.0), 0);
    }

    #[test]
    fn controller_outliving_viewport_drops_cleanly() {
        let viewport = Viewport::new();
        let about = VisibilityController::mount(&viewport, SectionKind::About, Threshold::DEFAULT);

        drop(viewport);

        assert!(!about.is_visible());
        drop(about);
    }

    #[test]
    fn sections_without_reveal_do_not_mount() {
        let viewport = Viewport::new();

        assert!(VisibilityController::for_section(&viewport, SectionKind::Hero).is_none());
        assert_eq!(viewport.observer_count(), 0);
    }
}

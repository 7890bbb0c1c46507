use uuid::Uuid;

/// Toasts kept on screen at once. A new toast evicts the oldest.
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

/// Host for transient notifications.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    toasts: Vec<Toast>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
        };
        let id = toast.id;

        self.toasts.insert(0, toast);
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    /// Newest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_the_toast_id() {
        let mut toaster = Toaster::new();
        assert!(toaster.is_empty());

        let id = toaster.push("Saved", "All good");

        assert_eq!(toaster.toasts().len(), 1);
        assert_eq!(toaster.toasts()[0].id, id);
        assert_eq!(toaster.toasts()[0].title, "Saved");
    }

    #[test]
    fn newest_toast_evicts_oldest() {
        let mut toaster = Toaster::new();

        toaster.push("First", "one");
        let second = toaster.push("Second", "two");

        assert_eq!(toaster.toasts().len(), TOAST_LIMIT);
        assert_eq!(toaster.toasts()[0].id, second);
    }
}

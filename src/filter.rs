// View filtering for the task collection

/// Which subset of the collection a view shows.
///
/// The mode is plain process state: it is never persisted, any transition is
/// legal, and a fresh service always starts at `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every task, in insertion order.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks only.
    Completed,
}

impl Filter {
    /// Whether a task with the given completion state is visible.
    pub fn admits(self, completed: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !completed,
            Filter::Completed => completed,
        }
    }

    /// Parse a mode name coming from an embedder.
    ///
    /// Anything unrecognized degrades to `All`, so a stale or mistyped mode
    /// string shows everything instead of nothing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_admits_everything() {
        assert!(Filter::All.admits(false));
        assert!(Filter::All.admits(true));
    }

    #[test]
    fn test_active_admits_only_incomplete() {
        assert!(Filter::Active.admits(false));
        assert!(!Filter::Active.admits(true));
    }

    #[test]
    fn test_completed_admits_only_complete() {
        assert!(!Filter::Completed.admits(false));
        assert!(Filter::Completed.admits(true));
    }

    #[test]
    fn test_from_name_known_modes() {
        assert_eq!(Filter::from_name("all"), Filter::All);
        assert_eq!(Filter::from_name("active"), Filter::Active);
        assert_eq!(Filter::from_name("completed"), Filter::Completed);
    }

    #[test]
    fn test_from_name_unrecognized_falls_back_to_all() {
        assert_eq!(Filter::from_name(""), Filter::All);
        assert_eq!(Filter::from_name("archived"), Filter::All);
        assert_eq!(Filter::from_name("ACTIVE"), Filter::All);
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Filter::All.to_string(), "all");
        assert_eq!(Filter::Active.to_string(), "active");
        assert_eq!(Filter::Completed.to_string(), "completed");
    }
}

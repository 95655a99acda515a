//! Specialization options offered by the registration form

use std::fmt;

/// A selectable specialization (the empty placeholder is not a variant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialization {
    FullStack,
    Frontend,
    Backend,
}

impl Specialization {
    /// All options in display order
    pub const ALL: [Specialization; 3] = [Self::FullStack, Self::Frontend, Self::Backend];

    /// Label shown to the user, also the submitted value
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullStack => "Full Stack",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
        }
    }

    /// Exact match against an option label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Cycle forward through placeholder -> options -> placeholder
    pub fn cycle_next(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::FullStack),
            Some(Self::FullStack) => Some(Self::Frontend),
            Some(Self::Frontend) => Some(Self::Backend),
            Some(Self::Backend) => None,
        }
    }

    /// Cycle backward through placeholder -> options -> placeholder
    pub fn cycle_prev(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Backend),
            Some(Self::Backend) => Some(Self::Frontend),
            Some(Self::Frontend) => Some(Self::FullStack),
            Some(Self::FullStack) => None,
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_round_trips_every_option() {
        for option in Specialization::ALL {
            assert_eq!(Specialization::from_label(option.label()), Some(option));
        }
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(Specialization::from_label(""), None);
        assert_eq!(Specialization::from_label("backend"), None);
        assert_eq!(Specialization::from_label(" Backend"), None);
    }

    #[test]
    fn test_cycle_next_visits_placeholder() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            current = Specialization::cycle_next(current);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(Specialization::FullStack),
                Some(Specialization::Frontend),
                Some(Specialization::Backend),
                None
            ]
        );
    }

    #[test]
    fn test_cycle_prev_inverts_cycle_next() {
        for current in [None, Some(Specialization::FullStack), Some(Specialization::Backend)] {
            let next = Specialization::cycle_next(current);
            assert_eq!(Specialization::cycle_prev(next), current);
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Specialization::Frontend.to_string(), "Frontend");
    }
}

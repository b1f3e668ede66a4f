use std::fmt::Display;

/// Placeholder shape shown while a section is loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skeleton {
    #[default]
    Block,
    Card,
    Hero,
    Grid,
}

impl Skeleton {
    pub fn min_height(self) -> &'static str {
        match self {
            Self::Hero => "100vh",
            Self::Grid => "540px",
            Self::Block | Self::Card => "400px",
        }
    }
}

/// Lifecycle of a single page section.
///
/// `Pending` until its content is available, then either `Ready` or `Failed`.
/// A failed section goes back to `Pending` when the visitor asks to retry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectionState<T> {
    #[default]
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> SectionState<T> {
    pub fn pending() -> Self {
        Self::Pending
    }

    /// Maps an in-flight load result onto a section state.
    pub fn from_load<E: Display>(load: Option<Result<T, E>>) -> Self {
        match load {
            None => Self::Pending,
            Some(Ok(value)) => Self::Ready(value),
            Some(Err(e)) => Self::Failed(e.to_string()),
        }
    }

    pub fn resolve(&mut self, value: T) {
        if self.is_pending() {
            *self = Self::Ready(value);
        }
    }

    pub fn fail(&mut self, err: impl Display) {
        if self.is_pending() {
            log::warn!("section failed to load: {err}");
            *self = Self::Failed(err.to_string());
        }
    }

    /// Puts a failed section back to `Pending` so it can be built again.
    /// Returns `false`, and does nothing, unless the section had failed.
    pub fn reset(&mut self) -> bool {
        if matches!(self, Self::Failed(_)) {
            *self = Self::Pending;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_to_ready() {
        let mut state = SectionState::pending();
        state.resolve(3);
        assert_eq!(state, SectionState::Ready(3));
    }

    #[test]
    fn test_pending_to_failed_and_retry() {
        let mut state = SectionState::<u8>::pending();
        state.fail("chunk failed");
        assert_eq!(state.error(), Some("chunk failed"));

        // resolving a failed section is ignored until it is reset
        state.resolve(1);
        assert!(state.error().is_some());

        assert!(state.reset());
        assert!(state.is_pending());
        state.resolve(1);
        assert_eq!(state, SectionState::Ready(1));
    }

    #[test]
    fn test_retry_that_fails_again() {
        let mut state = SectionState::<()>::pending();
        state.fail("first");
        assert!(state.reset());
        state.fail("second");
        assert_eq!(state.error(), Some("second"));
    }

    #[test]
    fn test_reset_only_from_failed() {
        let mut state = SectionState::<u8>::pending();
        assert!(!state.reset());
        assert!(state.is_pending());

        state.resolve(4);
        assert!(!state.reset());
        assert_eq!(state, SectionState::Ready(4));
    }

    #[test]
    fn test_ready_is_not_overwritten_by_late_failure() {
        let mut state = SectionState::pending();
        state.resolve("content");
        state.fail("late error");
        assert_eq!(state, SectionState::Ready("content"));
    }

    #[test]
    fn test_from_load() {
        assert!(SectionState::<u8>::from_load::<String>(None).is_pending());
        assert_eq!(
            SectionState::from_load::<String>(Some(Ok(2))),
            SectionState::Ready(2)
        );
        assert_eq!(
            SectionState::<u8>::from_load(Some(Err("boom"))),
            SectionState::Failed("boom".to_string())
        );
    }

    #[test]
    fn test_sections_are_independent() {
        let mut sections = vec![SectionState::pending(); 3];
        sections[1].fail("projects exploded");
        sections[0].resolve("hero");
        sections[2].resolve("contact");
        assert_eq!(sections[0], SectionState::Ready("hero"));
        assert!(sections[1].error().is_some());
        assert_eq!(sections[2], SectionState::Ready("contact"));
    }
}

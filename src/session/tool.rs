//! Usage state for the one-shot assist tools

/// Lifecycle of a tool that may succeed at most once per session
///
/// `Used` is terminal: no method leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolState {
    #[default]
    Unused,
    /// A request is outstanding; further invocations are ignored
    InFlight,
    Used,
}

impl ToolState {
    #[must_use]
    pub const fn is_used(self) -> bool {
        matches!(self, Self::Used)
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Unused)
    }

    /// Unused → InFlight. Returns false (and changes nothing) otherwise.
    pub(crate) fn begin(&mut self) -> bool {
        if self.is_available() {
            *self = Self::InFlight;
            true
        } else {
            false
        }
    }

    /// InFlight → Used
    pub(crate) fn settle(&mut self) {
        if *self == Self::InFlight {
            *self = Self::Used;
        }
    }

    /// InFlight → Unused, for a request the authority turned down
    pub(crate) fn release(&mut self) {
        if *self == Self::InFlight {
            *self = Self::Unused;
        }
    }

    /// Unused → Used in one step. Returns false if already spent or pending.
    pub(crate) fn lock(&mut self) -> bool {
        if self.is_available() {
            *self = Self::Used;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_then_settle() {
        let mut state = ToolState::default();
        assert!(state.begin());
        assert_eq!(state, ToolState::InFlight);
        assert!(!state.begin());

        state.settle();
        assert!(state.is_used());
    }

    #[test]
    fn release_returns_to_unused() {
        let mut state = ToolState::Unused;
        assert!(state.begin());
        state.release();
        assert!(state.is_available());
    }

    #[test]
    fn used_is_terminal() {
        let mut state = ToolState::Unused;
        assert!(state.lock());

        state.release();
        assert!(state.is_used());
        assert!(!state.begin());
        assert!(!state.lock());
        state.settle();
        assert!(state.is_used());
    }

    #[test]
    fn settle_requires_in_flight() {
        let mut state = ToolState::Unused;
        state.settle();
        assert!(state.is_available());
    }
}

//! Transient "wrong guess" signal shared by the whole board

use std::time::{Duration, Instant};

/// How long the effect stays visible after the most recent miss
pub const GLITCH_DURATION: Duration = Duration::from_millis(500);

/// Session-wide glitch flag
///
/// Misses never stack: each trigger restarts the window from `now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlitchEffect {
    until: Option<Instant>,
}

impl GlitchEffect {
    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + GLITCH_DURATION);
    }

    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_until_triggered() {
        let glitch = GlitchEffect::default();
        assert!(!glitch.is_active(Instant::now()));
    }

    #[test]
    fn expires_after_duration() {
        let start = Instant::now();
        let mut glitch = GlitchEffect::default();
        glitch.trigger(start);

        assert!(glitch.is_active(start));
        assert!(glitch.is_active(start + Duration::from_millis(499)));
        assert!(!glitch.is_active(start + GLITCH_DURATION));
    }

    #[test]
    fn retrigger_restarts_window() {
        let start = Instant::now();
        let mut glitch = GlitchEffect::default();
        glitch.trigger(start);
        glitch.trigger(start + Duration::from_millis(400));

        // Still on past the first window, but not doubled
        assert!(glitch.is_active(start + Duration::from_millis(800)));
        assert!(!glitch.is_active(start + Duration::from_millis(900)));
    }
}

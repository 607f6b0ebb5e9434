/// Whether a reveal target has played its entrance transition yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// One-shot fade/slide-in bookkeeping for a single element.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    delay_secs: f64,
    state: RevealState,
}

impl RevealTarget {
    pub fn new(delay_secs: f64) -> Self {
        Self {
            delay_secs: delay_secs.max(0.0),
            state: RevealState::Pending,
        }
    }

    /// Feeds one intersection observation. Returns `true` only for the
    /// observation that flips the target to revealed; everything after that
    /// is ignored.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match self.state {
            RevealState::Pending if is_intersecting => {
                self.state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn animation_delay_css(&self) -> String {
        format!("animation-delay: {}s;", self.delay_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending_and_ignores_non_intersecting_entries() {
        let mut target = RevealTarget::new(0.2);
        assert_eq!(target.state(), RevealState::Pending);
        assert!(!target.observe(false));
        assert!(!target.is_revealed());
    }

    #[test]
    fn reveals_exactly_once() {
        let mut target = RevealTarget::new(0.0);
        assert!(target.observe(true));
        assert!(target.is_revealed());

        // scrolling away and back again must not replay the transition
        assert!(!target.observe(false));
        assert!(!target.observe(true));
        assert!(!target.observe(true));
        assert_eq!(target.state(), RevealState::Revealed);
    }

    #[test]
    fn negative_delay_is_treated_as_immediate() {
        let target = RevealTarget::new(-1.0);
        assert_eq!(target.animation_delay_css(), "animation-delay: 0s;");
        assert_eq!(
            RevealTarget::new(0.3).animation_delay_css(),
            "animation-delay: 0.3s;"
        );
    }
}

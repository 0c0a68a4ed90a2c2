//! One-way reveal state for sections that animate in once they become visible.

use tracing::debug;

pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Moves to `Revealed`. Returns true only for the call that made the transition.
    pub fn reveal(&mut self) -> bool {
        match self {
            Self::Pending => {
                *self = Self::Revealed;
                true
            }
            Self::Revealed => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Observation {
    Active,
    Disconnected,
}

/// Reveals a region the first time enough of it is on screen, then stops observing.
#[derive(Debug, Clone)]
pub struct ViewportReveal {
    threshold: f32,
    state: RevealState,
    observation: Observation,
}

impl ViewportReveal {
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            state: RevealState::Pending,
            observation: Observation::Active,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    pub fn is_observing(&self) -> bool {
        self.observation == Observation::Active
    }

    /// Feeds one intersection measurement (fraction of the region's area on screen).
    /// Returns true exactly when this observation revealed the region.
    pub fn observe(&mut self, visible_fraction: f32) -> bool {
        if !self.is_observing() || !self.is_intersecting(visible_fraction) {
            return false;
        }
        let transitioned = self.state.reveal();
        self.disconnect();
        if transitioned {
            debug!(visible_fraction, threshold = self.threshold, "section revealed");
        }
        transitioned
    }

    pub fn disconnect(&mut self) {
        self.observation = Observation::Disconnected;
    }

    fn is_intersecting(&self, visible_fraction: f32) -> bool {
        // NaN fails both comparisons.
        visible_fraction > 0.0 && visible_fraction >= self.threshold
    }
}

impl Default for ViewportReveal {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending_and_observing() {
        let reveal = ViewportReveal::default();
        assert_eq!(reveal.state(), RevealState::Pending);
        assert!(reveal.is_observing());
        assert!((reveal.threshold() - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn ignores_fractions_below_threshold() {
        let mut reveal = ViewportReveal::new(0.1);
        assert!(!reveal.observe(0.0));
        assert!(!reveal.observe(0.05));
        assert!(!reveal.observe(f32::NAN));
        assert!(!reveal.is_revealed());
        assert!(reveal.is_observing());
    }

    #[test]
    fn reveals_once_and_stops_observing() {
        let mut reveal = ViewportReveal::new(0.1);
        assert!(reveal.observe(0.1));
        assert!(reveal.is_revealed());
        assert!(!reveal.is_observing());

        // Leaving and re-entering the viewport changes nothing.
        for fraction in [0.0, 1.0, 0.0, 0.5] {
            assert!(!reveal.observe(fraction));
            assert!(reveal.is_revealed());
        }
    }

    #[test]
    fn zero_threshold_still_requires_some_overlap() {
        let mut reveal = ViewportReveal::new(0.0);
        assert!(!reveal.observe(0.0));
        assert!(reveal.observe(0.001));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(ViewportReveal::new(3.0).threshold(), 1.0);
        assert_eq!(ViewportReveal::new(-1.0).threshold(), 0.0);
        assert_eq!(
            ViewportReveal::new(f32::NAN).threshold(),
            DEFAULT_REVEAL_THRESHOLD
        );
    }

    #[test]
    fn disconnected_controller_stays_pending() {
        let mut reveal = ViewportReveal::new(0.1);
        reveal.disconnect();
        assert!(!reveal.observe(1.0));
        assert!(!reveal.is_revealed());
    }

    #[test]
    fn state_reveal_reports_only_the_transition() {
        let mut state = RevealState::default();
        assert!(state.reveal());
        assert!(!state.reveal());
        assert!(state.is_revealed());
    }
}

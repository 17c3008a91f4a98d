//! Threshold crossings and score keeping
//!
//! Both the score trigger and the rock recycle trigger watch the rock's x
//! for a downward pass through a threshold. The two thresholds are
//! configured independently.

use serde::{Deserialize, Serialize};

use super::state::RunState;

/// Falling-edge detector for a tracked value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub threshold: f32,
    /// Whether landing exactly on the threshold counts as crossed
    pub inclusive: bool,
}

impl Crossing {
    /// Fires for `prev > threshold` and `current <= threshold`
    pub fn at_or_below(threshold: f32) -> Self {
        Self {
            threshold,
            inclusive: true,
        }
    }

    /// Fires for `prev > threshold` and `current < threshold`
    pub fn below(threshold: f32) -> Self {
        Self {
            threshold,
            inclusive: false,
        }
    }

    /// Whether the step `prev -> current` passes down through the threshold.
    /// The first observation (`prev == None`) never counts, and neither
    /// does a repeated value.
    pub fn fell_through(&self, prev: Option<f32>, current: f32) -> bool {
        let Some(prev) = prev else {
            return false;
        };
        if prev == current || prev <= self.threshold {
            return false;
        }
        if self.inclusive {
            current <= self.threshold
        } else {
            current < self.threshold
        }
    }
}

/// Awards a point each time the rock passes the jelly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    crossing: Crossing,
}

impl ScoreTracker {
    /// Track rocks passing the jelly at `player_x`
    pub fn new(player_x: f32) -> Self {
        Self {
            crossing: Crossing::at_or_below(player_x),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.crossing.threshold
    }

    /// Observe one rock step; returns true if it scored
    pub fn observe(&self, prev: Option<f32>, current: f32, run: &mut RunState) -> bool {
        self.crossing.fell_through(prev, current) && run.add_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Feed a position sequence, returning the indices that fired
    fn fire_indices(crossing: &Crossing, xs: &[f32]) -> Vec<usize> {
        let mut prev = None;
        let mut fired = Vec::new();
        for (i, &x) in xs.iter().enumerate() {
            if crossing.fell_through(prev, x) {
                fired.push(i);
            }
            prev = Some(x);
        }
        fired
    }

    #[test]
    fn test_score_once_when_landing_on_player_x() {
        let tracker = ScoreTracker::new(90.0);
        let mut run = RunState::new(1);
        let mut prev = None;
        let mut scored_at = Vec::new();
        for (i, x) in [150.0, 120.0, 90.0, 60.0].into_iter().enumerate() {
            if tracker.observe(prev, x, &mut run) {
                scored_at.push(i);
            }
            prev = Some(x);
        }
        assert_eq!(run.score(), 1);
        // The 120 -> 90 step, not 90 -> 60
        assert_eq!(scored_at, vec![2]);
    }

    #[test]
    fn test_recycle_fires_once_per_pass() {
        let recycle = Crossing::below(-100.0);
        assert_eq!(fire_indices(&recycle, &[-95.0, -105.0, -90.0]), vec![1]);
    }

    #[test]
    fn test_recycle_is_strict() {
        let recycle = Crossing::below(-100.0);
        // Landing exactly on the threshold does not recycle, and the next
        // step starts from the threshold so it does not either
        assert!(fire_indices(&recycle, &[-90.0, -100.0, -120.0]).is_empty());
    }

    #[test]
    fn test_reset_jump_does_not_score() {
        let tracker = ScoreTracker::new(100.0);
        let mut run = RunState::new(1);
        assert!(!tracker.observe(Some(-104.0), 400.0, &mut run));
        assert!(!tracker.observe(Some(400.0), 400.0, &mut run));
        assert_eq!(run.score(), 0);
    }

    #[test]
    fn test_first_observation_never_counts() {
        let tracker = ScoreTracker::new(100.0);
        let mut run = RunState::new(1);
        assert!(!tracker.observe(None, 50.0, &mut run));
        assert_eq!(run.score(), 0);
    }

    #[test]
    fn test_terminated_run_does_not_score() {
        let tracker = ScoreTracker::new(100.0);
        let mut run = RunState::new(1);
        assert!(tracker.observe(Some(101.0), 99.0, &mut run));
        run.terminate();
        assert!(!tracker.observe(Some(101.0), 99.0, &mut run));
        assert_eq!(run.score(), 1);
    }

    proptest! {
        #[test]
        fn monotone_sweep_scores_exactly_once(
            start in 200f32..600.0,
            step in 0.5f32..40.0,
        ) {
            let tracker = ScoreTracker::new(100.0);
            let mut run = RunState::new(1);
            let mut prev = None;
            let mut x = start;
            while x > -150.0 {
                tracker.observe(prev, x, &mut run);
                prev = Some(x);
                x -= step;
            }
            prop_assert_eq!(run.score(), 1);
        }
    }
}

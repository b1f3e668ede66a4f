use std::time::Duration;

use rand::Rng;

/// Interval between progress ticks.
pub const TICK: Duration = Duration::from_millis(40);
/// Pause between reaching 100% and hiding the gate.
pub const COMPLETE_DELAY: Duration = Duration::from_millis(400);

const MIN_STEP: f64 = 10.0;
const MAX_STEP: f64 = 40.0;

/// Simulated first-paint progress, 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadingProgress {
    percent: f64,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn rounded(&self) -> u8 {
        self.percent.round() as u8
    }

    /// Moves progress forward, never past 100. Returns true on the tick that
    /// completes the bar.
    pub fn advance(&mut self, increment: f64) -> bool {
        if self.is_complete() {
            return false;
        }
        self.percent = (self.percent + increment.max(0.0)).min(100.0);
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }
}

pub fn random_increment<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(MIN_STEP..MAX_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_starts_at_zero() {
        let progress = LoadingProgress::new();
        assert_eq!(progress.percent(), 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_advance_clamps_at_hundred() {
        let mut progress = LoadingProgress::new();
        assert!(!progress.advance(60.0));
        assert!(progress.advance(60.0));
        assert_eq!(progress.percent(), 100.0);
        assert_eq!(progress.rounded(), 100);
    }

    #[test]
    fn test_completion_fires_once() {
        let mut progress = LoadingProgress::new();
        assert!(progress.advance(150.0));
        assert!(!progress.advance(10.0));
        assert_eq!(progress.percent(), 100.0);
    }

    #[test]
    fn test_negative_increment_does_not_regress() {
        let mut progress = LoadingProgress::new();
        progress.advance(25.0);
        progress.advance(-10.0);
        assert_eq!(progress.percent(), 25.0);
    }

    #[test]
    fn test_random_ticks_finish_quickly() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut progress = LoadingProgress::new();
        let mut ticks = 0;
        while !progress.is_complete() {
            let step = random_increment(&mut rng);
            assert!((MIN_STEP..MAX_STEP).contains(&step));
            progress.advance(step);
            ticks += 1;
        }
        assert!((3..=10).contains(&ticks), "took {ticks} ticks");
    }
}

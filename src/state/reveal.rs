//! Staggered section entrance animation
//!
//! Each section reveals its items one after another when entered, the
//! terminal analog of a scroll-triggered entrance animation. Items fade
//! from hidden through dimmed to fully styled with a fixed per-item delay.

use std::time::{Duration, Instant};

/// Delay between consecutive items starting their reveal
const ITEM_STAGGER: Duration = Duration::from_millis(120);
/// Duration of a single item's reveal
const ITEM_DURATION: Duration = Duration::from_millis(450);

/// Entrance animation state for the current section
#[derive(Debug)]
pub struct RevealState {
    start_time: Instant,
    item_count: usize,
    skipped: bool,
}

impl RevealState {
    pub fn new(item_count: usize) -> Self {
        Self {
            start_time: Instant::now(),
            item_count,
            skipped: false,
        }
    }

    /// Restart the animation for a newly entered section
    pub fn restart(&mut self, item_count: usize) {
        self.start_time = Instant::now();
        self.item_count = item_count;
        self.skipped = false;
    }

    /// Jump straight to the fully revealed state
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    /// Eased reveal progress of the item at `index`, in `0.0..=1.0`
    pub fn progress(&self, index: usize) -> f32 {
        if self.skipped {
            return 1.0;
        }
        let delay = ITEM_STAGGER * index as u32;
        let elapsed = self.start_time.elapsed();
        if elapsed <= delay {
            return 0.0;
        }
        let raw = (elapsed - delay).as_secs_f32() / ITEM_DURATION.as_secs_f32();
        simple_easing::cubic_out(raw.clamp(0.0, 1.0))
    }

    /// True once every item has finished revealing
    pub fn is_complete(&self) -> bool {
        if self.skipped || self.item_count == 0 {
            return true;
        }
        let total = ITEM_STAGGER * (self.item_count - 1) as u32 + ITEM_DURATION;
        self.start_time.elapsed() >= total
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_moments_hide_later_items() {
        let reveal = RevealState::new(8);
        // An item far down the stagger chain cannot have started yet
        assert_eq!(reveal.progress(7), 0.0);
        assert!(!reveal.is_complete());
    }

    #[test]
    fn test_progress_is_clamped() {
        let reveal = RevealState::new(3);
        for idx in 0..3 {
            let p = reveal.progress(idx);
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_skip_completes_everything() {
        let mut reveal = RevealState::new(8);
        reveal.skip();
        assert!(reveal.is_complete());
        assert_eq!(reveal.progress(0), 1.0);
        assert_eq!(reveal.progress(7), 1.0);
    }

    #[test]
    fn test_zero_items_is_immediately_complete() {
        let reveal = RevealState::new(0);
        assert!(reveal.is_complete());
    }

    #[test]
    fn test_restart_resets_skip() {
        let mut reveal = RevealState::new(4);
        reveal.skip();
        assert!(reveal.is_complete());

        reveal.restart(4);
        assert_eq!(reveal.progress(3), 0.0);
        assert!(!reveal.is_complete());
    }
}

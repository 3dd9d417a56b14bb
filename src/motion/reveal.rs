/// Visible share of a block before it reveals.
pub const BLOCK_THRESHOLD: f64 = 0.12;
/// Visible share of a staggered text line before it reveals.
pub const TEXT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    NotObserving,
    Observing,
    Revealed,
}

/// One-shot viewport reveal for a single element.
///
/// `NotObserving -> Observing -> Revealed`, where `Revealed` is terminal.
/// Scrolling an element back out of view never hides it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTracker {
    phase: RevealPhase,
    threshold: f64,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(BLOCK_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            BLOCK_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            phase: RevealPhase::NotObserving,
            threshold,
        }
    }

    /// Element mounted, start watching it.
    pub fn observe(&mut self) {
        if self.phase == RevealPhase::NotObserving {
            self.phase = RevealPhase::Observing;
        }
    }

    /// Feed one intersection reading.
    ///
    /// Returns `true` only on the sample that reveals the element; the caller
    /// should stop observing at that point.
    pub fn sample(&mut self, visible_ratio: f64) -> bool {
        if self.phase != RevealPhase::Observing {
            return false;
        }
        if visible_ratio > 0.0 && visible_ratio >= self.threshold {
            self.phase = RevealPhase::Revealed;
            return true;
        }
        false
    }

    /// Element mounted in the browser. Starts observing when the browser can
    /// report intersections, otherwise reveals immediately.
    pub fn start(&mut self, observer_supported: bool) -> RevealPhase {
        if observer_supported {
            self.observe();
        } else {
            self.fail_open();
        }
        self.phase
    }

    /// Element went away before it was ever seen.
    pub fn release(&mut self) {
        if self.phase == RevealPhase::Observing {
            self.phase = RevealPhase::NotObserving;
        }
    }

    /// No way to observe the element, so show it right away.
    pub fn fail_open(&mut self) {
        self.phase = RevealPhase::Revealed;
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_observing(&self) -> bool {
        self.phase == RevealPhase::Observing
    }

    pub fn has_entered_view(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }
}

/// Inline style for a block reveal: slides up by `offset_px` and fades in.
pub fn reveal_style(revealed: bool, offset_px: f64, delay_ms: u32) -> String {
    if revealed {
        format!("opacity: 1; transform: translateY(0); transition-delay: {delay_ms}ms;")
    } else {
        format!("opacity: 0; transform: translateY({offset_px}px); transition-delay: {delay_ms}ms;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut tracker = RevealTracker::new(0.12);
        assert_eq!(tracker.phase(), RevealPhase::NotObserving);
        assert!(!tracker.has_entered_view());

        tracker.observe();
        assert!(tracker.is_observing());

        assert!(!tracker.sample(0.05));
        assert!(tracker.is_observing());

        assert!(tracker.sample(0.4));
        assert_eq!(tracker.phase(), RevealPhase::Revealed);
        assert!(tracker.has_entered_view());
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut tracker = RevealTracker::new(TEXT_THRESHOLD);
        tracker.observe();
        tracker.sample(1.0);

        // Scrolling away, re-observing or releasing never hides it again
        for ratio in [0.0, 0.5, 0.0, 1.0] {
            assert!(!tracker.sample(ratio));
            assert!(tracker.has_entered_view());
        }
        tracker.observe();
        tracker.release();
        assert!(tracker.has_entered_view());
    }

    #[test]
    fn test_samples_ignored_unless_observing() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.sample(1.0));
        assert_eq!(tracker.phase(), RevealPhase::NotObserving);

        tracker.observe();
        tracker.release();
        assert!(!tracker.sample(1.0));
        assert!(!tracker.has_entered_view());
    }

    #[test]
    fn test_threshold_boundary() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe();
        assert!(!tracker.sample(0.0));
        assert!(!tracker.sample(0.05));
        assert!(!tracker.sample(0.0999));
        assert!(tracker.sample(0.1));
    }

    #[test]
    fn test_just_under_threshold_stays_hidden() {
        let mut tracker = RevealTracker::new(BLOCK_THRESHOLD);
        tracker.observe();
        assert!(!tracker.sample(0.1195));
        assert!(tracker.is_observing());
        assert!(tracker.sample(0.12));
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealTracker::new(4.0).threshold(), 1.0);
        assert_eq!(RevealTracker::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealTracker::new(f64::NAN).threshold(), BLOCK_THRESHOLD);

        // Zero threshold still needs some part of the element on screen
        let mut tracker = RevealTracker::new(0.0);
        tracker.observe();
        assert!(!tracker.sample(0.0));
        assert!(tracker.sample(0.01));
    }

    #[test]
    fn test_fail_open() {
        let mut tracker = RevealTracker::default();
        tracker.fail_open();
        assert!(tracker.has_entered_view());
        assert!(!tracker.is_observing());
    }

    #[test]
    fn test_start_with_observer() {
        let mut tracker = RevealTracker::new(TEXT_THRESHOLD);
        assert_eq!(tracker.start(true), RevealPhase::Observing);
        assert!(!tracker.has_entered_view());
        assert!(tracker.sample(0.5));
    }

    #[test]
    fn test_start_without_observer_reveals() {
        let mut tracker = RevealTracker::new(BLOCK_THRESHOLD);
        assert_eq!(tracker.start(false), RevealPhase::Revealed);
        assert!(tracker.has_entered_view());
        // nothing left to sample
        assert!(!tracker.sample(1.0));
        tracker.release();
        assert!(tracker.has_entered_view());
    }

    #[test]
    fn test_start_after_reveal_keeps_revealed() {
        let mut tracker = RevealTracker::default();
        tracker.start(true);
        tracker.sample(1.0);
        assert_eq!(tracker.start(true), RevealPhase::Revealed);
    }

    #[test]
    fn test_independent_trackers() {
        let mut a = RevealTracker::default();
        let mut b = RevealTracker::default();
        a.observe();
        b.observe();
        a.sample(1.0);
        assert!(a.has_entered_view());
        assert!(!b.has_entered_view());
    }

    #[test]
    fn test_reveal_style() {
        assert_eq!(
            reveal_style(false, 24.0, 0),
            "opacity: 0; transform: translateY(24px); transition-delay: 0ms;"
        );
        assert_eq!(
            reveal_style(true, 24.0, 120),
            "opacity: 1; transform: translateY(0); transition-delay: 120ms;"
        );
    }
}

// Sticky-nav detector - is the navigation bar pinned to the top?
//
// Tracks the viewport-relative top of a sentinel placed right above the nav.
// Entering and leaving use different thresholds so the state does not
// flicker while the page rests near a single trigger point.

#[derive(Clone, Debug)]
pub struct StickyNavDetector {
    enter_at: f32,
    exit_at: f32,
    pinned: bool,
}

impl StickyNavDetector {
    /// Thresholds given the wrong way round are swapped.
    pub fn new(mut enter_at: f32, mut exit_at: f32) -> Self {
        if enter_at > exit_at {
            log::warn!("Sticky enter threshold {enter_at} is above exit threshold {exit_at}, swapping");
            std::mem::swap(&mut enter_at, &mut exit_at);
        }
        Self {
            enter_at,
            exit_at,
            pinned: false,
        }
    }

    /// Feeds the sentinel's current top (px, viewport-relative) and returns
    /// the pinned state after it.
    pub fn update(&mut self, sentinel_top: f32) -> bool {
        if self.pinned {
            if sentinel_top >= self.exit_at {
                self.pinned = false;
            }
        } else if sentinel_top <= self.enter_at {
            self.pinned = true;
        }
        self.pinned
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn reset(&mut self) {
        self.pinned = false;
    }
}

impl Default for StickyNavDetector {
    fn default() -> Self {
        Self::new(crate::layout::STICKY_ENTER_AT, crate::layout::STICKY_EXIT_AT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(positions: &[f32]) -> Vec<bool> {
        let mut detector = StickyNavDetector::default();
        positions.iter().map(|&top| detector.update(top)).collect()
    }

    #[test]
    fn test_enter_and_exit_thresholds() {
        // Pins at top <= -8 and unpins at top >= +12, so 15 unpins here.
        assert_eq!(run(&[20.0, -10.0, 15.0, -5.0]), vec![false, true, false, false]);
        assert_eq!(run(&[-8.0, 12.0]), vec![true, false]);
    }

    #[test]
    fn test_band_holds_previous_state() {
        // Anything strictly between -8 and +12 keeps whatever came before.
        assert_eq!(
            run(&[20.0, -7.9, 0.0, -9.0, 0.0, 11.9, 5.0, 12.5, 0.0]),
            vec![false, false, false, true, true, true, true, false, false]
        );
    }

    #[test]
    fn test_inverted_thresholds_are_swapped() {
        let mut detector = StickyNavDetector::new(12.0, -8.0);
        assert!(!detector.update(0.0));
        assert!(detector.update(-8.0));
        assert!(detector.update(11.0));
        assert!(!detector.update(12.0));
    }

    #[test]
    fn test_reset() {
        let mut detector = StickyNavDetector::new(-8.0, 12.0);
        assert!(detector.update(-100.0));
        detector.reset();
        assert!(!detector.is_pinned());
    }
}

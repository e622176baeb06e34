// Visibility tracker - which registered anchor is "most active" on screen
use crate::registry::SectionRegistry;
use crate::state::{CurrentSection, SectionId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// One anchor's on-screen geometry, as delivered by the host on every
/// visibility change. Coordinates are viewport-relative pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSample {
    pub anchor_id: String,
    pub intersection_ratio: f32,
    pub bounding_top: f32,
    pub bounding_height: f32,
}

impl ScrollSample {
    pub fn new(anchor_id: &str, intersection_ratio: f32, bounding_top: f32, bounding_height: f32) -> Self {
        Self {
            anchor_id: anchor_id.to_string(),
            intersection_ratio,
            bounding_top,
            bounding_height,
        }
    }

    pub fn center(&self) -> f32 {
        self.bounding_top + self.bounding_height / 2.0
    }
}

/// `ratio * (1 - |viewport_center - anchor_center| / viewport_height)`
pub fn score(sample: &ScrollSample, viewport_height: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    let viewport_center = viewport_height / 2.0;
    let distance = (viewport_center - sample.center()).abs() / viewport_height;
    sample.intersection_ratio * (1.0 - distance)
}

/// What the owner should do with its debounce task after an observation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Leave any running debounce as it is.
    Idle,
    /// (Re)start the debounce window for this candidate. The commit must not
    /// fire before `not_before`, the end of the cooldown after the last one.
    Schedule {
        candidate: SectionId,
        not_before: Instant,
    },
    /// The candidate fell back to the current section; drop the debounce.
    Cancel,
}

#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    registry: SectionRegistry,
    samples: HashMap<String, ScrollSample>,
    min_ratio: f32,
    cooldown: Duration,
    last_commit: Option<Instant>,
    pending: Option<SectionId>,
    available: bool,
}

impl VisibilityTracker {
    pub fn new(registry: SectionRegistry, min_ratio: f32, cooldown: Duration) -> Self {
        Self {
            registry,
            samples: HashMap::new(),
            min_ratio,
            cooldown,
            last_commit: None,
            pending: None,
            available: true,
        }
    }

    /// Tracker for a host that cannot observe anchor visibility.
    pub fn unavailable(registry: SectionRegistry) -> Self {
        log::info!("Visibility observation unavailable; section auto-detection disabled");
        Self {
            available: false,
            ..Self::new(registry, 1.0, Duration::ZERO)
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Merges the latest sample of each registered anchor.
    pub fn record(&mut self, samples: impl IntoIterator<Item = ScrollSample>) {
        if !self.available {
            return;
        }
        for sample in samples {
            if self.registry.section_for(&sample.anchor_id).is_none() {
                log::trace!("Ignoring sample for unregistered anchor '{}'", sample.anchor_id);
                continue;
            }
            self.samples.insert(sample.anchor_id.clone(), sample);
        }
    }

    /// Highest-scoring eligible anchor, ties going to the earlier section.
    pub fn best_candidate(&self, viewport_height: f32) -> Option<SectionId> {
        let mut best: Option<(&SectionId, f32)> = None;
        for descriptor in self.registry.iter() {
            let Some(sample) = self.samples.get(&descriptor.anchor_id) else {
                continue;
            };
            if sample.intersection_ratio <= self.min_ratio {
                continue;
            }
            let score = score(sample, viewport_height);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((&descriptor.id, score));
            }
        }
        best.map(|(id, _)| id.clone())
    }

    pub fn evaluate(&mut self, current: &CurrentSection, viewport_height: f32, now: Instant) -> Evaluation {
        if !self.available {
            return Evaluation::Idle;
        }
        // Nothing eligible: keep the previous section rather than falling back to home.
        let Some(candidate) = self.best_candidate(viewport_height) else {
            return Evaluation::Idle;
        };

        if current.section() == Some(&candidate) {
            return match self.pending.take() {
                Some(_) => Evaluation::Cancel,
                None => Evaluation::Idle,
            };
        }

        if self.pending.as_ref() == Some(&candidate) {
            return Evaluation::Idle;
        }

        self.pending = Some(candidate.clone());
        Evaluation::Schedule {
            candidate,
            not_before: self.cooldown_end(now),
        }
    }

    pub fn take_pending(&mut self) -> Option<SectionId> {
        self.pending.take()
    }

    pub fn mark_committed(&mut self, now: Instant) {
        self.last_commit = Some(now);
    }

    /// Forgets the pending candidate without touching the cooldown.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub fn reset(&mut self) {
        self.samples.clear();
        self.pending = None;
        self.last_commit = None;
    }

    fn cooldown_end(&self, now: Instant) -> Instant {
        self.last_commit
            .map_or(now, |at| (at + self.cooldown).max(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SectionDescriptor;

    fn registry() -> SectionRegistry {
        SectionRegistry::new([
            SectionDescriptor::new("a", "anchor-a"),
            SectionDescriptor::new("b", "anchor-b"),
        ])
    }

    fn tracker() -> VisibilityTracker {
        VisibilityTracker::new(registry(), 0.1, Duration::from_millis(500))
    }

    #[test]
    fn test_score_prefers_centered_anchor() {
        // A: ratio 0.6, centered at 900 of 1000 -> 0.6 * 0.6 = 0.36
        // B: ratio 0.5, centered at 500 of 1000 -> 0.5 * 1.0 = 0.50
        let a = ScrollSample::new("anchor-a", 0.6, 800.0, 200.0);
        let b = ScrollSample::new("anchor-b", 0.5, 300.0, 400.0);
        assert!((score(&a, 1000.0) - 0.36).abs() < 1e-5);
        assert!((score(&b, 1000.0) - 0.5).abs() < 1e-5);

        let mut tracker = tracker();
        tracker.record([a, b]);
        assert_eq!(tracker.best_candidate(1000.0), Some(SectionId::new("b")));
    }

    #[test]
    fn test_low_ratio_is_ineligible() {
        let mut tracker = tracker();
        tracker.record([ScrollSample::new("anchor-a", 0.1, 450.0, 100.0)]);
        assert_eq!(tracker.best_candidate(1000.0), None);
        assert_eq!(tracker.evaluate(&CurrentSection::active("b"), 1000.0, Instant::now()), Evaluation::Idle);
    }

    #[test]
    fn test_samples_merge_per_anchor() {
        let mut tracker = tracker();
        tracker.record([
            ScrollSample::new("anchor-a", 0.9, 0.0, 1000.0),
            ScrollSample::new("anchor-b", 0.2, 900.0, 1000.0),
        ]);
        // Only B changed; A's previous sample is kept.
        tracker.record([ScrollSample::new("anchor-b", 0.3, 800.0, 1000.0)]);
        assert_eq!(tracker.best_candidate(1000.0), Some(SectionId::new("a")));
        tracker.record([ScrollSample::new("unknown", 1.0, 0.0, 1000.0)]);
        assert_eq!(tracker.best_candidate(1000.0), Some(SectionId::new("a")));
    }

    #[test]
    fn test_evaluate_schedules_once_per_candidate() {
        let mut tracker = tracker();
        let now = Instant::now();
        tracker.record([ScrollSample::new("anchor-b", 1.0, 0.0, 1000.0)]);
        let home = CurrentSection::Home;
        assert_eq!(
            tracker.evaluate(&home, 1000.0, now),
            Evaluation::Schedule {
                candidate: SectionId::new("b"),
                not_before: now
            }
        );
        assert_eq!(tracker.evaluate(&home, 1000.0, now), Evaluation::Idle);

        // Scrolling back onto the current section cancels the pending change.
        tracker.record([ScrollSample::new("anchor-b", 0.0, 1000.0, 1000.0)]);
        tracker.record([ScrollSample::new("anchor-a", 1.0, 0.0, 1000.0)]);
        assert_eq!(tracker.evaluate(&CurrentSection::active("a"), 1000.0, now), Evaluation::Cancel);
        assert_eq!(tracker.take_pending(), None);
    }

    #[test]
    fn test_cooldown_after_commit() {
        let mut tracker = tracker();
        let start = Instant::now();
        tracker.mark_committed(start);
        tracker.record([ScrollSample::new("anchor-b", 1.0, 0.0, 1000.0)]);
        let current = CurrentSection::active("a");
        // A candidate seen during the cooldown is deferred to its end, not dropped.
        assert_eq!(
            tracker.evaluate(&current, 1000.0, start + Duration::from_millis(100)),
            Evaluation::Schedule {
                candidate: SectionId::new("b"),
                not_before: start + Duration::from_millis(500)
            }
        );
        tracker.clear_pending();
        assert_eq!(
            tracker.evaluate(&current, 1000.0, start + Duration::from_millis(700)),
            Evaluation::Schedule {
                candidate: SectionId::new("b"),
                not_before: start + Duration::from_millis(700)
            }
        );
    }

    #[test]
    fn test_unavailable_reports_home() {
        let mut tracker = VisibilityTracker::unavailable(registry());
        tracker.record([ScrollSample::new("anchor-a", 1.0, 0.0, 1000.0)]);
        assert!(!tracker.is_available());
        assert_eq!(tracker.best_candidate(1000.0), None);
        assert_eq!(tracker.evaluate(&CurrentSection::Home, 1000.0, Instant::now()), Evaluation::Idle);
    }
}

pub mod sticky;
pub mod visibility;

pub use sticky::StickyNavDetector;
pub use visibility::{score, Evaluation, ScrollSample, VisibilityTracker};

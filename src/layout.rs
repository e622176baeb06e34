// Layout and timing constants for catalog-nav

// --- Timing ---
pub const NAVIGATION_GUARD_MS: u64 = 1500;
pub const SECTION_COOLDOWN_MS: u64 = 500;
pub const SECTION_DEBOUNCE_MS: u64 = 300;
pub const INITIAL_SCROLL_DELAY_MS: u64 = 100;

// --- Visibility ---
pub const MIN_INTERSECTION_RATIO: f32 = 0.1;

// --- Sticky nav ---
pub const STICKY_ENTER_AT: f32 = -8.0;
pub const STICKY_EXIT_AT: f32 = 12.0;
/// Height kept clear above an anchor when scrolling to it (the pinned nav).
pub const SCROLL_OFFSET: f32 = 60.0;

// --- Demo page sizing ---
pub const HERO_HEIGHT: f32 = 520.0;
pub const NAV_HEIGHT: f32 = 36.0;
pub const SECTION_MIN_HEIGHT: f32 = 640.0;
pub const CARD_HEIGHT: f32 = 72.0;
pub const FILTER_PANEL_WIDTH: f32 = 220.0;

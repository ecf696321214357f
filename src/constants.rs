use std::time::Duration;

// Navigation (browser-scale defaults)
pub const REGION_THRESHOLD: f64 = 100.0;
pub const SCROLL_EPSILON: f64 = 5.0;
pub const ADVANCE_THRESHOLD: f64 = 150.0;
pub const SETTLE_DELAY_MS: u64 = 800;
pub const SETTLE_DELAY: Duration = Duration::from_millis(SETTLE_DELAY_MS);

// Navigation (terminal cells)
pub const TERMINAL_REGION_THRESHOLD: f64 = 3.0;
pub const TERMINAL_SCROLL_EPSILON: f64 = 0.5;
pub const TERMINAL_ADVANCE_THRESHOLD: f64 = 10.0;
pub const DEFAULT_WHEEL_STEP: u16 = 6;
pub const PAGE_SCROLL_ROWS: u16 = 3;

// Page layout
pub const MIN_HERO_HEIGHT: u16 = 14;
pub const FOOTER_HEIGHT: u16 = 10;
pub const CARD_WIDTH: u16 = 34;
pub const CARD_GAP: u16 = 3;
pub const CARD_HEIGHT: u16 = 9;

// Animation
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);
pub const PAGE_SCROLL_EASING: f64 = 0.35;

// Logging
pub const DEFAULT_LOG_DIRECTIVE: &str = "furrow=debug";

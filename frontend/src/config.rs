use log::Level;

pub const PAGE_TITLE: &str = "Chai Royal | Premium Tea Reserve";

/// Launch instant, read in the visitor's local timezone.
pub const LAUNCH_DATE: &str = "March 1, 2026 00:00:00";
pub const LAUNCH_DATE_FORMAT: &str = "%B %d, %Y %H:%M:%S";

pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Vertical offset (px) past which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub const THEME_ATTRIBUTE: &str = "data-theme";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

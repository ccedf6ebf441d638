use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose output when running locally with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "WebsiteExpertz";
pub const CONTACT_EMAIL: &str = "info@websiteexpertz.com";
pub const CONTACT_PHONE: &str = "+91-8923992522";
pub const CONTACT_PHONE_HREF: &str = "tel:+918923992522";

// Reveal defaults
pub const REVEAL_DISTANCE_PX: f64 = 60.0;
pub const REVEAL_DURATION_S: f64 = 0.6;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const ADVANCED_REVEAL_DISTANCE_PX: f64 = 50.0;
pub const ADVANCED_REVEAL_DURATION_S: f64 = 0.8;
pub const ADVANCED_REVEAL_MARGIN: &str = "-50px";

// Header turns opaque past this offset
pub const HEADER_SCROLLED_PX: f64 = 20.0;
pub const DESKTOP_MIN_WIDTH_PX: f64 = 1024.0;
pub const NAV_DOTS_THRESHOLD: f64 = 0.4;

/// Pointer distance beyond which magnetic text, dots and particles stop reacting.
pub const POINTER_FALLOFF_PX: f64 = 100.0;
pub const PARTICLE_MAX_PUSH_PX: f64 = 20.0;

pub const COUNTER_DURATION_MS: f64 = 800.0;
pub const SCROLL_COUNTER_DURATION_MS: f64 = 2000.0;
pub const SCROLL_COUNTER_THRESHOLD: f64 = 0.5;

/// Tick used by interval-driven tweens; roughly one frame at 60 Hz.
pub const FRAME_MS: u32 = 16;

use log::Level;

/// Key under which the selected language survives reloads.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

pub const SCROLL_PROGRESS_ID: &str = "scroll-progress";

/// Element the (invisible) enhancer component is mounted into.
/// Created under `<body>` when the page template doesn't provide one.
pub const MOUNT_POINT_ID: &str = "landing-enhancer";

pub const ACTIVE_CLASS: &str = "active";

pub const TRANSLATABLE_SELECTOR: &str = "[data-ko][data-en]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const FORM_SELECTOR: &str = "form";
pub const FADE_IN_SELECTOR: &str = ".tech-item, .ai-card, .solution-card, .spec-row";

// IntersectionObserver tuning for the fade-in animation
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const FADE_IN_OFFSET_PX: u32 = 30;
pub const FADE_IN_TRANSITION: &str =
    "opacity 0.6s cubic-bezier(0.4, 0, 0.2, 1), transform 0.6s cubic-bezier(0.4, 0, 0.2, 1)";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

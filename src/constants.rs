// DOM hooks the page markup provides, and rendering tuning for the web layer

// Page root
pub const VARIANT_ATTR: &str = "data-variant"; // on <body>: "original" | "creative"
pub const DARK_CLASS: &str = "dark"; // toggled on <html>

// Navigation
pub const NAV_BUTTON_PREFIX: &str = "nav-"; // nav buttons are #nav-<section>
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Decorations
pub const PARTICLE_CONTAINER_ID: &str = "particle-field";
pub const PARTICLE_COUNT_ATTR: &str = "data-particle-count";
pub const PARTICLE_CLASS: &str = "particle";
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const GEOMETRY_ID: &str = "floating-geometry";
pub const GEOMETRY_PX_PER_UNIT: f32 = 40.0; // world-space lift -> CSS pixels

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_ID: &str = "contact-submit";
pub const SUBMIT_LABEL_ID: &str = "contact-submit-label";
pub const SUCCESS_BANNER_ID: &str = "contact-success";
pub const ERROR_BANNER_ID: &str = "contact-error";

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[inline]
pub fn nav_button_id(section: &str) -> String {
    format!("{NAV_BUTTON_PREFIX}{section}")
}

// DOM hooks and storage keys shared by the web frontend.

// Particle background
pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";
pub const DENSITY_ATTRIBUTE: &str = "data-density"; // optional px² per particle override

// Avatar anatomy
pub const AVATAR_SELECTOR: &str = ".hero__avatar";
pub const FACE_SELECTOR: &str = ".avatar__face";
pub const EYES_SELECTOR: &str = ".avatar__eyes";
pub const LEFT_EYE_SELECTOR: &str = ".avatar__eye:first-child";
pub const RIGHT_EYE_SELECTOR: &str = ".avatar__eye:last-child";
pub const PUPIL_SELECTOR: &str = ".avatar__pupil"; // queried inside an eye
pub const EYEBROW_SELECTOR: &str = ".avatar__eyebrow"; // queried inside an eye
pub const SMILE_SELECTOR: &str = ".avatar__smile";

// CSS classes toggled from render params
pub const SQUINT_CLASS: &str = "squint";
pub const WIDE_CLASS: &str = "wide";

// Elements whose hover boosts the smile
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, .btn, [role=\"button\"], input, textarea, select";

// Theme toggle
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_ICON_SELECTOR: &str = ".theme-toggle__icon";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_STORAGE_KEY: &str = "theme";

// DOM hooks and presentation constants for the web front end.
//
// Kept free of web-sys types so host-side tests can include this file.
// Hero letters
pub const LETTER_SELECTOR: &str = "[data-animated-letter]";
pub const LETTER_RELEASE_TRANSITION: &str = "transform 0.5s cubic-bezier(0.25, 1, 0.5, 1)";
pub const LETTER_LIVE_TRANSITION: &str = "transform 0s";

// Marquee band
pub const MARQUEE_ROOT_ID: &str = "marquee";
pub const MARQUEE_CONTAINER_SELECTOR: &str = ".marquee-container";
pub const MARQUEE_CONTENT_SELECTOR: &str = ".marquee-content";
pub const MARQUEE_COPIES: f64 = 2.0; // content is laid out twice back to back
pub const MARQUEE_VISIBILITY_THRESHOLD: f64 = 0.1;

// Wavy field behind the about section
pub const FIELD_SECTION_ID: &str = "about";
pub const FIELD_PATH_SELECTOR: &str = "svg[data-wiggle] path";

// Custom cursor
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const CURSOR_HOVER_SELECTOR: &str = "[data-cursor-hover]";
pub const CURSOR_HOVER_CLASS: &str = "is-hovering";
pub const CURSOR_HIDDEN_CLASS: &str = "is-hidden";

// Navigation chrome
pub const MAIN_NAV_ID: &str = "main-nav";
pub const PILL_NAV_ID: &str = "pill-nav";
pub const PILL_VISIBLE_CLASS: &str = "is-visible";
pub const MAIN_NAV_HIDDEN_CLASS: &str = "is-hidden";

// Parallax
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_BG_SELECTOR: &str = "[data-parallax-bg]";
pub const PARALLAX_FG_SELECTOR: &str = "[data-parallax-fg]";

// Pointer-driven backdrop
pub const POINTER_PARALLAX_SELECTOR: &str = "[data-pointer-parallax]";
pub const POINTER_LAYER_SELECTOR: &str = "[data-pointer-layer]";
pub const POINTER_RIPPLE_SELECTOR: &str = "[data-ripple]";
pub const POINTER_LAYER_TRANSITION: &str = "transform 0.8s ease-out";
pub const RIPPLE_VISIBLE_CLASS: &str = "is-visible";

// View counter
pub const VIEW_COUNT_ID: &str = "view-count";
pub const VIEWS_ENDPOINT: &str = "/api/views";

// Smooth-scroll integration
pub const SMOOTH_SCROLL_GLOBAL: &str = "locomotive";
pub const SMOOTH_SCROLL_READY_EVENT: &str = "smoothscroll:ready";

// Per-element overrides read from data-* attributes
pub const ATTR_LINES: &str = "data-lines";
pub const ATTR_RADIUS: &str = "data-radius";
pub const ATTR_SPEED: &str = "data-speed";
pub const ATTR_FOLLOW: &str = "data-follow";
pub const ATTR_DEPTH: &str = "data-depth";

//! Document structure contract: ids, classes, attributes, and selectors the
//! interaction layer expects the page markup to expose.

// ── Theme ───────────────────────────────────────────────────────

/// Id of the single theme toggle control.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Body class present while the light theme is active.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

// ── Sections & navigation ───────────────────────────────────────

pub const SECTIONS: &str = ".section";
pub const NAV_LINKS: &str = ".nav a[data-section]";
pub const SECTION_TARGET_ATTR: &str = "data-section";
pub const ACTIVE_CLASS: &str = "active";
pub const LOGO: &str = ".logo";

/// In-page anchors that smooth-scroll to their target.
pub const INTERNAL_ANCHORS: &str = "a[href^=\"#\"]";

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_CARDS: &str = ".feature-card, .member-card, .blog-card, .challenge-card, .project-card";
pub const STAT_BOXES: &str = ".stat-box, .about-stat";

/// Card grids whose entrance animation is staggered by index.
pub const STAGGERED_GRIDS: [&str; 2] = [".member-card", ".blog-card"];

// ── Cards ───────────────────────────────────────────────────────

pub const CARD_HEADING: &str = "h3";
pub const PROJECT_CARD: &str = ".project-card";
pub const PROJECT_DESCRIPTION: &str = ".project-description";
pub const PROJECT_FILTER_INPUT: &str = ".projects-filters .filter-input";
pub const PROJECT_BUTTONS: &str = ".btn-project, .btn-project-secondary";

/// Class carried by a project's "view repository" button.
pub const PROJECT_VIEW_CLASS: &str = "btn-project";

pub const CHALLENGE_CARD: &str = ".challenge-card";
pub const CHALLENGE_BUTTONS: &str = ".btn-challenge";

pub const CALL_TO_ACTION_BUTTONS: &str = ".cta-button, .btn-secondary";

// ── Configuration ───────────────────────────────────────────────

/// Id of the optional JSON config block.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

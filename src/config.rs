use log::Level;

use crate::effects::stagger::{GroupSpec, Scope};

// Markup contract
pub const ANIMATION_MARKER: &str = "[data-animation]";
pub const DELAY_ATTRIBUTE: &str = "data-delay";
pub const REVEALED_CLASS: &str = "animate-in";
pub const ACTIVE_CLASS: &str = "active";
pub const TILT_CLASS: &str = "tilt-active";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_BOTTOM_MARGIN_PX: u32 = 100;

// Hero
pub const HERO_NAME: &str = ".typing-text";
pub const HERO_SUBTITLE: &str = ".hero-subtitle";
pub const HERO_DESCRIPTION: &str = ".hero-description";
pub const HERO_BUTTONS: &str = ".hero-buttons";
pub const TYPING_SPEED_MS: u32 = 80;
pub const NAME_SETTLE_MS: u32 = 200;
pub const SUBTITLE_SETTLE_MS: u32 = 200;
pub const DESCRIPTION_SETTLE_MS: u32 = 300;

// Tilt
pub const PROJECT_CARD: &str = ".project-card";
pub const TILT_MAX_DEG: f64 = 10.0;
pub const TILT_LIFT_PX: u32 = 8;
pub const TILT_SCALE: f64 = 1.02;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const TILT_RESET_MS: u32 = 300;

/// Stagger groups on the portfolio page, applied in this order at startup.
pub const STAGGER_GROUPS: [GroupSpec; 4] = [
    GroupSpec {
        name: "interests",
        scope: Scope::Within { container: ".bg-slate-700", children: "li" },
        base_ms: 0,
        step_ms: 100,
    },
    GroupSpec {
        name: "project cards",
        scope: Scope::Each { selector: PROJECT_CARD },
        base_ms: 0,
        step_ms: 200,
    },
    // Positional: tied to the nesting depth of the skills section markup.
    GroupSpec {
        name: "skill badges",
        scope: Scope::PerContainer { containers: "#skills > div > div > div", children: ".skill-badge" },
        base_ms: 0,
        step_ms: 50,
    },
    GroupSpec {
        name: "contact links",
        scope: Scope::Within { container: "#contact", children: "a" },
        base_ms: 0,
        step_ms: 150,
    },
];

/// Root margin handed to the intersection observer: only the bottom edge shrinks.
pub fn reveal_root_margin() -> String {
    format!("0px 0px -{}px 0px", REVEAL_BOTTOM_MARGIN_PX)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Whether the visitor asked for reduced motion. Read once at startup and
/// passed to every effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreference {
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    pub fn animates(self) -> bool {
        self == MotionPreference::Full
    }
}

use crate::clock::Clock;
use crate::config::{
    MotionPreference, TILT_CLASS, TILT_LIFT_PX, TILT_MAX_DEG, TILT_PERSPECTIVE_PX, TILT_RESET_MS,
    TILT_SCALE,
};
use crate::surface::Surface;

const RESET_TRANSITION: &str = "transform 0.3s ease-out";

/// Viewport rectangle of a card, as from `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Rotation for a pointer at viewport coordinates (`x`, `y`).
    pub fn at(bounds: Bounds, x: f64, y: f64) -> Self {
        let half_width = bounds.width / 2.0;
        let half_height = bounds.height / 2.0;
        let dx = normalized(x - bounds.left - half_width, half_width);
        let dy = normalized(y - bounds.top - half_height, half_height);
        // + 0.0 turns -0 into 0 so the centre prints as "0deg"
        Tilt {
            rotate_x: dy * -TILT_MAX_DEG + 0.0,
            rotate_y: dx * TILT_MAX_DEG + 0.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translateY(-{}px) scale({}) perspective({}px) rotateX({}deg) rotateY({}deg)",
            TILT_LIFT_PX, TILT_SCALE, TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y
        )
    }
}

fn normalized(offset: f64, half_extent: f64) -> f64 {
    if half_extent > 0.0 {
        offset / half_extent
    } else {
        0.0
    }
}

/// Pointer tilt for one card.
#[derive(Clone)]
pub struct TiltCard<S: Surface, C: Clock> {
    surface: S,
    clock: C,
}

impl<S: Surface, C: Clock> TiltCard<S, C> {
    /// `None` under reduced motion: the card is left untouched.
    pub fn attach(surface: S, preference: MotionPreference, clock: C) -> Option<Self> {
        if !preference.animates() {
            return None;
        }
        surface.add_class(TILT_CLASS);
        Some(Self { surface, clock })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn pointer_moved(&self, bounds: Bounds, x: f64, y: f64) {
        let tilt = Tilt::at(bounds, x, y);
        self.surface.set_style("transform", &tilt.transform());
    }

    pub fn pointer_left(&self) {
        self.surface.set_style("transform", "");
        self.surface.set_style("transition", RESET_TRANSITION);

        let surface = self.surface.clone();
        self.clock.after(TILT_RESET_MS, move || {
            surface.set_style("transition", "");
        });
    }
}

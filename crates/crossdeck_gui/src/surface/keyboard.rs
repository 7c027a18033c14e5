//! On-screen keyboard detection from window resizes.

use eframe::egui::Vec2;

/// Height loss (as a fraction of the baseline) that signals a keyboard.
pub const KEYBOARD_HEIGHT_RATIO: f32 = 0.25;
/// Width change tolerated while still treating a resize as a keyboard.
pub const WIDTH_TOLERANCE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Baseline {
    window: Vec2,
    container_height: f32,
}

/// Infers how much of the surface a soft keyboard hides.
///
/// A window height drop of at least a quarter with an unchanged width is taken
/// as a keyboard opening; any other resize becomes the new baseline. Height the
/// surface container already gave up is not hidden, so it is subtracted from
/// the keyboard height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyboardInsetTracker {
    baseline: Option<Baseline>,
    inset: f32,
}

impl KeyboardInsetTracker {
    pub fn inset(&self) -> f32 {
        self.inset
    }

    /// Feed the window and surface container sizes; returns the inferred inset.
    pub fn observe(&mut self, window: Vec2, container: Vec2) -> f32 {
        let current = Baseline {
            window,
            container_height: container.y,
        };
        let Some(baseline) = self.baseline else {
            self.baseline = Some(current);
            self.inset = 0.0;
            return 0.0;
        };

        let same_width = (window.x - baseline.window.x).abs() <= WIDTH_TOLERANCE;
        let keyboard = baseline.window.y - window.y;
        if same_width && keyboard >= baseline.window.y * KEYBOARD_HEIGHT_RATIO {
            let already_lost = (baseline.container_height - container.y).max(0.0);
            self.inset = (keyboard - already_lost).max(0.0);
        } else {
            self.baseline = Some(current);
            self.inset = 0.0;
        }
        self.inset
    }
}

//! Pointer gesture classification: tap, pan, pinch, and long-press reveal.

use eframe::egui::{Pos2, Vec2};

/// Movement (in points) after which a press becomes a pan.
pub const DRAG_THRESHOLD: f32 = 5.0;
/// Taps are ignored for this long after a pan or pinch ends.
pub const CLICK_SUPPRESS_SECS: f64 = 0.1;
/// Holding a press this long reveals the cell under it.
pub const LONG_PRESS_SECS: f64 = 0.5;

/// Pointer state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub time: f64,
    /// Position of a primary press that started this frame.
    pub pressed_at: Option<Pos2>,
    pub position: Option<Pos2>,
    pub primary_down: bool,
    pub released: bool,
    pub secondary_click: Option<Pos2>,
    /// Two-finger zoom factor and centre.
    pub pinch: Option<(f32, Pos2)>,
    /// Wheel/trackpad zoom factor and pointer position.
    pub wheel_zoom: Option<(f32, Pos2)>,
}

/// What a frame of pointer input amounts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap(Pos2),
    Reveal(Pos2),
    Pan(Vec2),
    Zoom { factor: f32, focus: Pos2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pending {
        origin: Pos2,
        pressed_at: f64,
        long_press_fired: bool,
    },
    Panning {
        last: Pos2,
    },
    Pinching,
}

/// Turns raw pointer samples into [`Gesture`]s.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    phase: Phase,
    suppress_until: f64,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            suppress_until: f64::NEG_INFINITY,
        }
    }
}

impl GestureTracker {
    /// True while a press may still become a tap or long-press.
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.phase, Phase::Panning { .. })
    }

    pub fn taps_suppressed(&self, time: f64) -> bool {
        time < self.suppress_until
    }

    fn end_drag(&mut self, time: f64) {
        self.phase = Phase::Idle;
        self.suppress_until = time + CLICK_SUPPRESS_SECS;
    }

    pub fn update(&mut self, sample: &PointerSample) -> Vec<Gesture> {
        let mut out = Vec::new();
        let time = sample.time;

        if let Some((factor, focus)) = sample.pinch {
            self.phase = Phase::Pinching;
            if factor != 1.0 {
                out.push(Gesture::Zoom { factor, focus });
            }
            return out;
        }
        if self.phase == Phase::Pinching {
            self.end_drag(time);
        }

        if let Some((factor, focus)) = sample.wheel_zoom {
            if factor != 1.0 {
                out.push(Gesture::Zoom { factor, focus });
            }
        }
        if let Some(pos) = sample.secondary_click {
            if !self.taps_suppressed(time) {
                out.push(Gesture::Reveal(pos));
            }
        }
        if let Some(origin) = sample.pressed_at {
            self.phase = Phase::Pending {
                origin,
                pressed_at: time,
                long_press_fired: false,
            };
        }

        match self.phase {
            Phase::Pending {
                origin,
                pressed_at,
                mut long_press_fired,
            } => {
                if let Some(pos) = sample.position.filter(|_| sample.primary_down) {
                    if (pos - origin).length() > DRAG_THRESHOLD {
                        out.push(Gesture::Pan(pos - origin));
                        self.phase = Phase::Panning { last: pos };
                        return out;
                    }
                }
                if !long_press_fired && time - pressed_at >= LONG_PRESS_SECS {
                    long_press_fired = true;
                    out.push(Gesture::Reveal(origin));
                }
                if sample.released {
                    if !long_press_fired && !self.taps_suppressed(time) {
                        out.push(Gesture::Tap(origin));
                    }
                    self.phase = Phase::Idle;
                } else {
                    self.phase = Phase::Pending {
                        origin,
                        pressed_at,
                        long_press_fired,
                    };
                }
            }
            Phase::Panning { last } => {
                if let Some(pos) = sample.position {
                    if pos != last {
                        out.push(Gesture::Pan(pos - last));
                        self.phase = Phase::Panning { last: pos };
                    }
                }
                if sample.released || !sample.primary_down {
                    self.end_drag(time);
                }
            }
            Phase::Idle | Phase::Pinching => {}
        }
        out
    }
}

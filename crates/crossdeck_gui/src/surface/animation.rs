//! Animated dashed outline around the selected cell.

use eframe::egui;
use tracing::trace;

/// Dash travel speed in points per second.
pub const DASH_SPEED: f32 = 24.0;
/// Length of one dash plus one gap.
pub const DASH_PERIOD: f32 = 8.0;

/// Start/stop handle for the per-frame selection animation.
///
/// While running, each frame requests a repaint so the dash phase advances.
/// Stopping (or dropping the handle) ends the repaint requests.
#[derive(Debug, Default)]
pub struct SelectionAnimation {
    started_at: Option<f64>,
}

impl SelectionAnimation {
    pub fn start(&mut self, now: f64) {
        if self.started_at.is_none() {
            trace!("selection animation started");
        }
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        if self.started_at.take().is_some() {
            trace!("selection animation stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Dash offset at `now`, or `None` when stopped.
    pub fn phase(&self, now: f64) -> Option<f32> {
        let started = self.started_at?;
        let elapsed = (now - started).max(0.0) as f32;
        Some((elapsed * DASH_SPEED) % DASH_PERIOD)
    }

    /// Advance one frame: returns the dash phase and schedules the next frame.
    pub fn tick(&self, ctx: &egui::Context, now: f64) -> Option<f32> {
        let phase = self.phase(now)?;
        ctx.request_repaint();
        Some(phase)
    }
}

impl Drop for SelectionAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

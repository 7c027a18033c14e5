//! Progress toasts stacked above the status bar.

use super::super::*;
use eframe::egui;

/// Time over which a toast fades out before it expires.
const TOAST_FADE: Duration = Duration::from_millis(600);
const TOAST_WIDTH: f32 = 280.0;
const TOAST_MARGIN: f32 = 36.0;

/// Toast texts paired with their opacity, newest first.
pub(in crate::app) fn toast_stack(
    toasts: &VecDeque<ToastMessage>,
    now: Instant,
) -> Vec<(&str, f32)> {
    toasts
        .iter()
        .rev()
        .filter_map(|toast| {
            let left = toast.expires_at.checked_duration_since(now)?;
            let alpha = (left.as_secs_f32() / TOAST_FADE.as_secs_f32()).min(1.0);
            Some((toast.text.as_str(), alpha))
        })
        .collect()
}

impl CrossdeckApp {
    /// Draws live toasts bottom-centered over the board; older ones fade out.
    pub(crate) fn render_toasts(&self, ctx: &egui::Context) {
        let stack = toast_stack(&self.toasts, Instant::now());
        if stack.is_empty() {
            return;
        }
        let colors = chrome(self.surface.theme());

        egui::Area::new(egui::Id::new("crossdeck_toasts"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -TOAST_MARGIN))
            .order(egui::Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_width(TOAST_WIDTH);
                // Newest last so it sits closest to the status bar.
                ui.vertical_centered(|ui| {
                    for (text, alpha) in stack.into_iter().rev() {
                        egui::Frame::new()
                            .fill(colors.bg_tertiary.gamma_multiply(alpha))
                            .stroke(egui::Stroke::new(1.0, COLOR_ACCENT.gamma_multiply(alpha)))
                            .corner_radius(egui::CornerRadius::same(6))
                            .inner_margin(egui::Margin::symmetric(10, 6))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(text)
                                        .color(colors.text_primary.gamma_multiply(alpha)),
                                );
                            });
                    }
                });
            });
    }
}

//! Bottom status bar rendering for progress and feedback.

use super::super::*;
use eframe::egui;

impl CrossdeckApp {
    /// Renders word progress, the active clue's difficulty, and the latest status.
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let colors = chrome(self.surface.theme());
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(session) = &self.session {
                        let (completed, total) = session.progress();
                        let color = if session.is_complete() {
                            COLOR_ACCENT
                        } else {
                            colors.text_secondary
                        };
                        ui.label(
                            egui::RichText::new(format!("{}/{} words", completed, total))
                                .color(color),
                        );
                        ui.separator();
                        ui.label(
                            egui::RichText::new(session.difficulty().label())
                                .small()
                                .color(colors.text_muted),
                        );
                    } else {
                        ui.label(
                            egui::RichText::new("No puzzle")
                                .small()
                                .color(colors.text_muted),
                        );
                    }
                    if let Some(status) = &self.status {
                        ui.separator();
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&status.text).color(COLOR_STATUS),
                            )
                            .truncate(),
                        );
                    }
                });
            });
    }
}

//! Central panel hosting the puzzle surface.

use super::super::*;
use crate::surface::SurfaceAction;
use eframe::egui;

impl CrossdeckApp {
    /// Draws the board and returns pointer actions for the session.
    pub(crate) fn render_board(&mut self, ctx: &egui::Context) -> Vec<SurfaceAction> {
        let colors = chrome(self.surface.theme());
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(colors.bg_primary))
            .show(ctx, |ui| match self.session.as_ref() {
                Some(session) => self.surface.show(ui, session),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new("Pick a deck and press Start")
                                .color(colors.text_muted),
                        );
                    });
                    Vec::new()
                }
            })
            .inner
    }
}

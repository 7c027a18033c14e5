//! Top bar with deck, difficulty, and session controls.

use super::super::*;
use eframe::egui;

impl CrossdeckApp {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let colors = chrome(self.surface.theme());
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(egui::RichText::new("Crossdeck").color(COLOR_ACCENT));
                    ui.add_space(8.0);

                    let mut deck_id = self.deck_id.clone();
                    let deck_label = self
                        .catalog
                        .get(&deck_id)
                        .map(|deck| deck.name.clone())
                        .unwrap_or_else(|| "No decks".to_string());
                    egui::ComboBox::from_id_salt("deck_select")
                        .selected_text(deck_label)
                        .show_ui(ui, |ui| {
                            for deck in self.catalog.decks() {
                                ui.selectable_value(&mut deck_id, deck.id.clone(), deck.name.as_str());
                            }
                        });
                    self.deck_id = deck_id;

                    let mut difficulty = self.difficulty;
                    egui::ComboBox::from_id_salt("difficulty_select")
                        .selected_text(difficulty.label())
                        .show_ui(ui, |ui| {
                            for level in Difficulty::ALL {
                                ui.selectable_value(&mut difficulty, level, level.label());
                            }
                        });
                    if difficulty != self.difficulty {
                        self.change_difficulty(difficulty);
                    }

                    let has_session = self.session.is_some();
                    let start_label = if has_session { "Restart" } else { "Start" };
                    if ui.button(start_label).clicked() {
                        self.start_session();
                    }
                    if ui
                        .add_enabled(has_session, egui::Button::new("Regenerate"))
                        .clicked()
                    {
                        self.regenerate();
                    }
                    if ui
                        .add_enabled(has_session, egui::Button::new("Quit"))
                        .clicked()
                    {
                        self.quit_session();
                        self.set_status("Session ended");
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let next = self.surface.theme().toggled();
                        let toggle = ui.button(
                            egui::RichText::new(format!("{} theme", next.label()))
                                .color(colors.text_secondary),
                        );
                        if toggle.clicked() {
                            self.toggle_theme();
                        }
                    });
                });
            });
    }
}

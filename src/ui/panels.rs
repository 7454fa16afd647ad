use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – country dropdown and dataset summary
// ---------------------------------------------------------------------------

/// Render the country selector and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        // Clone what we need so we can mutate state inside the combo box.
        let countries = state.countries().to_vec();

        if !countries.is_empty() {
            ui.strong("Country");
            let current = state.selected_country().unwrap_or_default().to_string();
            egui::ComboBox::from_id_salt("country_select")
                .selected_text(current.as_str())
                .height(400.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for country in &countries {
                        // Re-selecting the current country still redraws.
                        let label = ui.selectable_label(current == *country, country.as_str());
                        if label.clicked() {
                            if let Err(e) = state.select_country(country) {
                                log::error!("{e}");
                            }
                        }
                    }
                });
            ui.separator();
        }

        if let Some(store) = &state.store {
            ui.label(format!(
                "{} records, {} countries",
                store.records().len(),
                store.countries().len()
            ));
            let issues = store.dataset().issues.len();
            if issues > 0 {
                ui.separator();
                ui.label(
                    RichText::new(format!("{issues} unreadable cells (see log)"))
                        .color(Color32::YELLOW),
                );
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

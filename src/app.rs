use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{canvas, panels, tooltip};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PopscopeApp {
    pub state: AppState,
}

impl PopscopeApp {
    /// Load the dataset and draw the initial charts before the first frame.
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::load(config),
        }
    }
}

impl eframe::App for PopscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // ---- Top panel: country dropdown ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: line chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let state = &mut self.state;
                let response = canvas::paint_scene(ui, &state.line_scene);

                let pointer = response.hover_pos();
                let over_line = pointer.is_some_and(|p| {
                    let local = p - response.rect.min.to_vec2();
                    state
                        .line_scene
                        .hit_path(local, state.config.tooltip.hover_tolerance)
                });
                // The fade starts on this frame, so the overlay needs another pass.
                if state.tooltip.update(over_line, pointer, now).is_some() {
                    ui.ctx().request_repaint();
                }
            });
        });

        // ---- Overlay: scatter reference panel ----
        tooltip::show(ctx, &self.state.tooltip, &self.state.scatter_scene, now);
    }
}

// src/gui/components/load_bar.rs
//
// Top bar: CSV path entry + Load, the loaded-file pill, and the sampling
// controls. Loading replaces the batch wholesale; re-sampling only changes
// which rows are visible.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("CSV file:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.csv_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(340.0))
            .changed()
        {
            logd!("UI: csv_path_text changed → {}", app.csv_path_text);
        }

        if ui.button("Load CSV").clicked() {
            actions::load(app);
        }

        if !app.state.gui.loaded_file.is_empty() {
            let pill = egui::RichText::new(&app.state.gui.loaded_file)
                .color(egui::Color32::from_rgb(0x2E, 0xA0, 0x5D))
                .strong();
            ui.label(pill);
        }
    });

    ui.horizontal(|ui| {
        let can_sample = !app.records.is_empty();

        if ui.add_enabled(can_sample, egui::Button::new("Re-sample")).clicked() {
            app.rebuild_sample();
            let msg = app.sample_message();
            logf!("UI: Re-sample → {}", msg);
            app.status(msg);
        }

        let before = app.state.options.sample.show_all;
        ui.checkbox(&mut app.state.options.sample.show_all, "Show all rows");
        if app.state.options.sample.show_all != before {
            logf!("UI: show_all → {}", app.state.options.sample.show_all);
            app.rebuild_sample();
            app.status(app.sample_message());
        }

        if can_sample {
            ui.label(app.sample_message());
        } else {
            ui.label("Load a supplier CSV to begin");
        }
    });
}

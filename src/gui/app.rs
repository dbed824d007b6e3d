// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use rand::thread_rng;

use crate::{
    config::state::AppState,
    core::num::price_cell,
    record::ProductRecord,
    sample,
    specs::retailers,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Market Comparison",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical batch; replaced wholesale on every load
    pub records: Vec<ProductRecord>,

    // visible sample: positions into `records`, kept in file order
    pub row_ix: Vec<usize>,

    // per-record × per-retailer text buffers backing the editable cells
    pub price_edits: Vec<Vec<String>>,

    // input path text field UX
    pub csv_path_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!("Init: retailers={}, sample size={}", retailers::COUNT, state.options.sample.size);

        Self {
            state,
            records: Vec::new(),
            row_ix: Vec::new(),
            price_edits: Vec::new(),
            csv_path_text: s!(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Replace the whole batch with a freshly parsed one.
    /// Edit buffers and the visible sample are rebuilt from scratch.
    pub fn set_batch(&mut self, records: Vec<ProductRecord>, file_name: &str) {
        self.price_edits = records
            .iter()
            .map(|r| (0..retailers::COUNT).map(|s| price_cell(r.retailer_price(s))).collect())
            .collect();
        self.records = records;
        self.state.gui.loaded_file = s!(file_name);
        self.rebuild_sample();
    }

    /// Redraw the visible subset. Show-all bypasses sampling; otherwise a
    /// fresh uniform sample is taken, so calling this again may well show
    /// different rows.
    pub fn rebuild_sample(&mut self) {
        let pool = self.records.len();
        self.row_ix = if self.state.options.sample.show_all {
            (0..pool).collect()
        } else {
            sample::sample_sorted(pool, self.state.options.sample.size, &mut thread_rng())
        };
        logd!("Sample: showing {}/{} row(s)", self.row_ix.len(), pool);
    }

    #[inline]
    pub fn sample_message(&self) -> String {
        format!("Showing {} of {} product(s)", self.row_ix.len(), self.records.len())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::load_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}

// src/gui/components/data_table.rs
//
// Draws the live comparison table. Retailer cells are editable; an edit
// re-coerces the text and updates that one record, so the derived columns
// for the row are correct on the next frame. Purely a view otherwise.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::core::num::coerce_price;
use crate::gui::app::App;
use crate::metrics;
use crate::specs::retailers;
use crate::view;

// Identity block, then one editable column per retailer, then derived.
const NAME_COL: usize = 1;
const REG_COL: usize = 5;
const SALE_COL: usize = 6;

fn column_width(ci: usize) -> f32 {
    match ci {
        0 => 80.0,              // Product ID
        NAME_COL => 200.0,      // Product
        2 | 3 => 90.0,          // Brand, SKU
        4 => 110.0,             // Supplier
        REG_COL | SALE_COL => 70.0,
        _ => 78.0,              // retailer inputs + derived columns
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.records.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No data yet").strong());
            ui.label("Load a supplier price CSV above. The first row must be the header row.");
        });
        return;
    }

    let headers = view::headers();
    let cols = headers.len();

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("report_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            inner_table(ui, app, &headers, cols);
        });
}

fn inner_table(ui: &mut egui::Ui, app: &mut App, headers: &[String], cols: usize) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("report_table");
    for ci in 0..cols {
        table = table.column(
            Column::initial(column_width(ci)).resizable(true).clip(true).at_least(20.0),
        );
    }

    table
        .header(24.0, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    ui.scope(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let label = RichText::new(headers[ci].as_str()).strong();
                        if ci == NAME_COL {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.add(egui::Label::new(label).selectable(false));
                            });
                        } else {
                            ui.centered_and_justified(|ui| {
                                ui.add(egui::Label::new(label).selectable(false));
                            });
                        }
                    });
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.row_ix.len(), |mut row| {
                let row_idx = row.index();
                let Some(&src_ix) = app.row_ix.get(row_idx) else { return };

                // Snapshot the non-editable cells before the edit borrows.
                let (ident, lowest_cell, pct_reg, pct_sale) = {
                    let rec = &app.records[src_ix];
                    let lowest = metrics::lowest_competitor_price(rec);
                    (
                        [
                            rec.id.clone(),
                            rec.name.clone(),
                            rec.brand.clone().unwrap_or_default(),
                            rec.sku.clone().unwrap_or_default(),
                            rec.supplier.clone().unwrap_or_default(),
                            view::fmt_price(rec.regular_price),
                            view::fmt_price(rec.sale_price),
                        ],
                        view::fmt_price(lowest),
                        view::fmt_pct(metrics::percent_difference(rec.regular_price, lowest)),
                        view::fmt_pct(metrics::percent_difference(rec.sale_price, lowest)),
                    )
                };

                for (ci, cell) in ident.iter().enumerate() {
                    let mut rt = RichText::new(cell.as_str());
                    if ci == REG_COL {
                        rt = rt.color(egui::Color32::from_rgb(0xB9, 0x1C, 0x1C)).strong();
                    } else if ci == SALE_COL {
                        rt = rt.color(egui::Color32::from_rgb(0x15, 0x80, 0x3D)).strong();
                    }
                    row.col(|ui| {
                        if ci == NAME_COL {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.label(rt.clone());
                            });
                        } else {
                            ui.centered_and_justified(|ui| { ui.label(rt.clone()); });
                        }
                    });
                }

                for slot in 0..retailers::COUNT {
                    row.col(|ui| {
                        let resp = ui.add(
                            egui::TextEdit::singleline(&mut app.price_edits[src_ix][slot])
                                .desired_width(64.0),
                        );
                        if resp.changed() {
                            // Unparseable input means "no observed price".
                            let value = coerce_price(&app.price_edits[src_ix][slot]);
                            app.records[src_ix].set_retailer_price(slot, value);
                            logd!(
                                "Edit: row={} retailer={} → {:?}",
                                src_ix, retailers::LABELS[slot], value
                            );
                        }
                    });
                }

                for cell in [&lowest_cell, &pct_reg, &pct_sale] {
                    row.col(|ui| {
                        ui.centered_and_justified(|ui| {
                            ui.label(RichText::new(cell.as_str()).strong());
                        });
                    });
                }
            });
        });
}

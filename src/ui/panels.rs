//! Top toolbar, central chart panel, and bottom status bar.

use eframe::egui::{Align, CentralPanel, ComboBox, Context, Layout, TopBottomPanel};
use strum::IntoEnumIterator;

use crate::{
    app::App,
    config::{CandleResolution, RangePreset},
    ui::{UI_CONFIG, UI_TEXT},
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_bar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(UI_TEXT.prev).clicked() {
                        self.navigate_previous();
                    }

                    let label = self
                        .session
                        .as_ref()
                        .map(|s| s.pager().label())
                        .unwrap_or_else(|| "- / -".to_string());
                    ui.monospace(label);

                    if ui.button(UI_TEXT.next).clicked() {
                        self.navigate_next();
                    }

                    ui.separator();

                    let mut range = self.range;
                    ComboBox::from_id_salt("range_preset")
                        .selected_text(range.to_string())
                        .width(64.0)
                        .show_ui(ui, |ui| {
                            for preset in RangePreset::iter() {
                                ui.selectable_value(&mut range, preset, preset.to_string());
                            }
                        });
                    if range != self.range {
                        self.range = range;
                        self.request_render();
                    }

                    let mut resolution = self.resolution;
                    ComboBox::from_id_salt("candle_resolution")
                        .selected_text(resolution.to_string())
                        .width(64.0)
                        .show_ui(ui, |ui| {
                            for res in CandleResolution::iter() {
                                ui.selectable_value(&mut resolution, res, res.to_string());
                            }
                        });
                    if resolution != self.resolution {
                        self.resolution = resolution;
                        self.request_render();
                    }

                    ui.separator();

                    self.render_search_box(ui);

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .button(UI_TEXT.fullscreen_icon)
                            .on_hover_text("Fullscreen (F11)")
                            .clicked()
                        {
                            self.toggle_fullscreen(ctx);
                        }
                    });
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = &self.status_line {
                ui.colored_label(UI_CONFIG.colors.status_error, message);
            }
            self.presenter.ui(ui);
        });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(record) = self.session.as_ref().and_then(|s| s.selected()) {
                        ui.monospace(&record.symbol);
                        if let Some(name) = &record.company_name {
                            ui.label(name);
                        }
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.fetcher.in_flight() {
                            ui.spinner();
                            ui.label(UI_TEXT.fetching);
                        }
                    });
                });
            });
    }
}

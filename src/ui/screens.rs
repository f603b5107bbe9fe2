//! Full-window screens for the phases that have no chart yet.

use eframe::egui::{CentralPanel, Context, RichText};

use crate::ui::{UI_CONFIG, UI_TEXT};

pub(crate) fn render_loading(ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.centered_and_justified(|ui| {
            ui.set_max_width(300.0);
            ui.vertical(|ui| {
                ui.heading(UI_TEXT.loading_heading);
                ui.add_space(10.0);
                ui.spinner();
                ui.add_space(10.0);
                ui.label(UI_TEXT.loading_detail);
            });
        });
    });
}

/// Returns true when the user hit Retry.
pub(crate) fn render_failed(ctx: &Context, message: &str) -> bool {
    let mut retry = false;

    CentralPanel::default().show(ctx, |ui| {
        ui.centered_and_justified(|ui| {
            ui.set_max_width(420.0);
            ui.vertical(|ui| {
                ui.heading(
                    RichText::new(UI_TEXT.error_heading).color(UI_CONFIG.colors.status_error),
                );
                ui.add_space(8.0);
                ui.label(message);
                ui.add_space(12.0);
                if ui.button(UI_TEXT.retry).clicked() {
                    retry = true;
                }
            });
        });
    });

    retry
}

use eframe::egui::Ui;

use crate::{
    chart::{CandlePlot, ChartSurface},
    data::{QuoteFormatter, RawQuoteSeries},
    error::QuoteError,
    ui::UI_TEXT,
};

/// Drives the chart surface: shapes the raw series, clears whatever was on
/// screen, swaps in the new one.
pub struct ChartPresenter {
    surface: Box<dyn ChartSurface>,
}

impl Default for ChartPresenter {
    fn default() -> Self {
        Self::new(Box::new(CandlePlot::default()))
    }
}

impl ChartPresenter {
    pub fn new(surface: Box<dyn ChartSurface>) -> Self {
        Self { surface }
    }

    /// Returns the window title for the newly active symbol.
    pub fn present(&mut self, symbol: &str, raw: &RawQuoteSeries) -> Result<String, QuoteError> {
        let series = QuoteFormatter::format(raw)?;
        self.surface.clear();
        self.surface.set_series(symbol.to_owned(), series);
        Ok(format!("{symbol} - {}", UI_TEXT.app_name))
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    pub fn active_symbol(&self) -> Option<&str> {
        self.surface.symbol()
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        self.surface.ui(ui);
    }
}

use eframe::egui::Ui;

use crate::domain::FormattedSeries;

/// Capability boundary around whichever widget actually draws the chart. The
/// controller side only ever clears, hands over a shaped series, and asks for
/// a frame; the concrete plot library stays behind this seam.
pub trait ChartSurface {
    /// Drop any previously rendered series (no stale overlay between symbols).
    fn clear(&mut self);

    /// Swap in the series for `symbol`. An empty series is a valid state and
    /// renders as a "no data" placeholder.
    fn set_series(&mut self, symbol: String, series: FormattedSeries);

    /// Symbol currently on screen, if any.
    fn symbol(&self) -> Option<&str>;

    /// Whether a non-empty series is on screen.
    fn is_ready(&self) -> bool;

    /// Immediate-mode draw into the central panel.
    fn ui(&mut self, ui: &mut Ui);
}

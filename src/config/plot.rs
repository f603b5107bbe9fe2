//! Chart display configuration (colors, candle geometry, layout bands).

use eframe::egui::Color32;

pub struct PlotConfig {
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,

    /// Body width as a fraction of the slot between two candle centers.
    pub candle_width_pct: f64,
    pub candle_wick_width: f32,

    /// Fraction of the visible price range reserved for the volume band
    /// under the candles, plus the gap separating the two.
    pub volume_band_pct: f64,
    pub volume_gap_pct: f64,
    /// Volume bars are drawn dimmed so candles stay readable above them.
    pub volume_opacity: f32,

    /// Vertical headroom above/below the price extremes.
    pub price_pad_pct: f64,

    /// Rough number of labeled ticks on the time axis.
    pub x_label_target: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bullish_color: Color32::from_rgb(0x26, 0xa6, 0x9a),
    candle_bearish_color: Color32::from_rgb(0xef, 0x53, 0x50),

    candle_width_pct: 0.7,
    candle_wick_width: 1.5,

    volume_band_pct: 0.22,
    volume_gap_pct: 0.04,
    volume_opacity: 0.55,

    price_pad_pct: 0.02,

    x_label_target: 8.0,
};

//! Candlestick + volume rendering on egui_plot.

use std::ops::RangeInclusive;

use eframe::egui::{Color32, Stroke, Ui, Vec2b};
use egui_plot::{Axis, AxisHints, GridMark, Line, Plot, PlotPoints, PlotUi, Polygon, VPlacement};

use crate::{
    config::plot::PLOT_CONFIG,
    domain::{FormattedSeries, VolumeColor},
    ui::UI_TEXT,
    utils::epoch_sec_to_date_string,
};

use super::surface::ChartSurface;

#[derive(Default)]
pub struct CandlePlot {
    state: Option<PlotState>,
}

/// Everything derived once per series swap so the per-frame loop stays flat.
struct PlotState {
    symbol: String,
    series: FormattedSeries,
    /// (candle index, fraction of max volume, direction) for the bottom band.
    volume_bars: Vec<(usize, f64, VolumeColor)>,
    price_range: f64,
    y_min: f64,
    y_max: f64,
    vol_base: f64,
    vol_height: f64,
}

impl PlotState {
    fn build(symbol: String, series: FormattedSeries) -> Self {
        let (p_lo, p_hi) = series.price_bounds().unwrap_or((0.0, 1.0));
        let price_range = (p_hi - p_lo).max(f64::EPSILON);

        let pad = price_range * PLOT_CONFIG.price_pad_pct;
        let gap = price_range * PLOT_CONFIG.volume_gap_pct;
        let vol_height = price_range * PLOT_CONFIG.volume_band_pct;
        let vol_base = p_lo - pad - gap - vol_height;

        // Volumes are a time-subset of the candles; one forward walk pins
        // each bar to its candle's x slot.
        let max_vol = series.max_volume() as f64;
        let mut volume_bars = Vec::with_capacity(series.volumes.len());
        if max_vol > 0.0 {
            let mut vi = 0;
            for (ci, candle) in series.candles.iter().enumerate() {
                if vi >= series.volumes.len() {
                    break;
                }
                let volume = &series.volumes[vi];
                if volume.time == candle.time {
                    volume_bars.push((ci, volume.value as f64 / max_vol, volume.color));
                    vi += 1;
                }
            }
        }

        Self {
            symbol,
            series,
            volume_bars,
            price_range,
            y_min: vol_base - pad,
            y_max: p_hi + pad,
            vol_base,
            vol_height,
        }
    }
}

impl ChartSurface for CandlePlot {
    fn clear(&mut self) {
        self.state = None;
    }

    fn set_series(&mut self, symbol: String, series: FormattedSeries) {
        self.state = Some(PlotState::build(symbol, series));
    }

    fn symbol(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.symbol.as_str())
    }

    fn is_ready(&self) -> bool {
        self.state.as_ref().is_some_and(|s| !s.series.is_empty())
    }

    fn ui(&mut self, ui: &mut Ui) {
        let Some(state) = &self.state else {
            ui.centered_and_justified(|ui| {
                ui.label(UI_TEXT.chart_placeholder);
            });
            return;
        };

        if state.series.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(format!("{} {}", UI_TEXT.no_data_prefix, state.symbol));
            });
            return;
        }

        let candle_count = state.series.candles.len();

        Plot::new("candle_chart")
            .custom_x_axes(vec![create_time_axis(&state.series)])
            .label_formatter(|_, _| String::new())
            .x_grid_spacer(|input| {
                let (min, max) = input.bounds;
                let step = calculate_adaptive_step(max - min, PLOT_CONFIG.x_label_target);
                let start = (min / step).ceil() as i64;
                let end = (max / step).floor() as i64;
                (start..=end)
                    .map(|i| GridMark { value: i as f64 * step, step_size: step })
                    .collect()
            })
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(Vec2b { x: false, y: false })
            .allow_zoom(Vec2b { x: false, y: false })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(-1.0..=candle_count as f64);
                plot_ui.set_plot_bounds_y(state.y_min..=state.y_max);

                let half_w = PLOT_CONFIG.candle_width_pct / 2.0;
                let min_body = state.price_range * 0.001;

                for (x, candle) in state.series.candles.iter().enumerate() {
                    let x = x as f64;
                    let color = if candle.is_bullish() {
                        PLOT_CONFIG.candle_bullish_color
                    } else {
                        PLOT_CONFIG.candle_bearish_color
                    };

                    draw_wick(plot_ui, x, candle.high, candle.low, color);

                    let (body_lo, mut body_hi) = candle.body_range();
                    // Doji: stretch the body just enough to stay visible
                    if body_hi - body_lo < min_body {
                        body_hi = body_lo + min_body;
                    }
                    draw_rect(plot_ui, x, half_w, body_hi, body_lo, color);
                }

                for &(ci, fraction, color) in &state.volume_bars {
                    let base = match color {
                        VolumeColor::Up => PLOT_CONFIG.candle_bullish_color,
                        VolumeColor::Down => PLOT_CONFIG.candle_bearish_color,
                    };
                    let top = state.vol_base + state.vol_height * fraction.max(0.01);
                    draw_rect(
                        plot_ui,
                        ci as f64,
                        half_w,
                        top,
                        state.vol_base,
                        base.gamma_multiply(PLOT_CONFIG.volume_opacity),
                    );
                }
            });
    }
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag;

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never step below one candle slot
    (nice_step * mag).max(1.0)
}

// Maps the visual candle index back to its bucket date.
fn create_time_axis(series: &FormattedSeries) -> AxisHints<'static> {
    let timestamps: Vec<i64> = series.candles.iter().map(|c| c.time).collect();

    AxisHints::new(Axis::X)
        .formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let idx = mark.value.round();
            if idx < 0.0 || idx >= timestamps.len() as f64 {
                return String::new();
            }
            epoch_sec_to_date_string(timestamps[idx as usize])
        })
        .placement(VPlacement::Bottom)
}

#[inline]
fn draw_wick(plot_ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    plot_ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );
}

#[inline]
fn draw_rect(plot_ui: &mut PlotUi, x: f64, half_w: f64, top: f64, bottom: f64, color: Color32) {
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    plot_ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CandlePoint, VolumePoint};

    fn series() -> FormattedSeries {
        FormattedSeries {
            candles: vec![
                CandlePoint { time: 100, open: 10.0, high: 12.0, low: 9.0, close: 11.0 },
                CandlePoint { time: 200, open: 11.0, high: 13.0, low: 10.0, close: 10.5 },
                CandlePoint { time: 300, open: 10.5, high: 11.0, low: 8.0, close: 9.0 },
            ],
            volumes: vec![
                VolumePoint { time: 100, value: 500, color: VolumeColor::Up },
                VolumePoint { time: 300, value: 1000, color: VolumeColor::Down },
            ],
        }
    }

    #[test]
    fn volume_bars_land_in_their_candles_slots() {
        let state = PlotState::build("X".into(), series());
        let slots: Vec<(usize, VolumeColor)> =
            state.volume_bars.iter().map(|&(ci, _, c)| (ci, c)).collect();
        assert_eq!(slots, vec![(0, VolumeColor::Up), (2, VolumeColor::Down)]);
        // the largest bar fills the band
        assert_eq!(state.volume_bars[1].1, 1.0);
    }

    #[test]
    fn band_layout_keeps_volume_under_prices() {
        let state = PlotState::build("X".into(), series());
        assert!(state.vol_base + state.vol_height < 8.0); // below the lowest low
        assert!(state.y_min < state.vol_base);
        assert!(state.y_max > 13.0);
    }

    #[test]
    fn clear_then_set_replaces_the_series() {
        let mut plot = CandlePlot::default();
        assert!(!plot.is_ready());

        plot.set_series("A".into(), series());
        assert!(plot.is_ready());
        assert_eq!(plot.symbol(), Some("A"));

        plot.clear();
        assert!(!plot.is_ready());
        assert_eq!(plot.symbol(), None);

        plot.set_series("B".into(), FormattedSeries::default());
        assert_eq!(plot.symbol(), Some("B"));
        assert!(!plot.is_ready()); // empty series renders the placeholder
    }

    #[test]
    fn adaptive_step_snaps_to_nice_values() {
        assert_eq!(calculate_adaptive_step(80.0, 8.0), 10.0);
        assert_eq!(calculate_adaptive_step(250.0, 8.0), 50.0);
        // tiny ranges never step below one candle
        assert_eq!(calculate_adaptive_step(3.0, 8.0), 1.0);
    }
}

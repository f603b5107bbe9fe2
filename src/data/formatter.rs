//! Turns the raw parallel-array series into chart-ready candle and volume
//! sequences.

use crate::domain::{CandlePoint, FormattedSeries, VolumeColor, VolumePoint};
use crate::error::QuoteError;

use super::quote::RawQuoteSeries;

pub struct QuoteFormatter;

impl QuoteFormatter {
    /// A bucket becomes a candle only when all four OHLC slots are present;
    /// a partial bucket is dropped whole, never interpolated. Prices are
    /// rounded to 2 decimals because upstream floats carry noise well past
    /// display precision. A volume bar is emitted beside a kept candle when
    /// its slot is present, tinted by the close-vs-open direction.
    pub fn format(raw: &RawQuoteSeries) -> Result<FormattedSeries, QuoteError> {
        let n = raw.timestamps.len();
        Self::check_len("open", raw.open.len(), n)?;
        Self::check_len("high", raw.high.len(), n)?;
        Self::check_len("low", raw.low.len(), n)?;
        Self::check_len("close", raw.close.len(), n)?;
        Self::check_len("volume", raw.volume.len(), n)?;

        let mut candles = Vec::with_capacity(n);
        let mut volumes = Vec::with_capacity(n);

        for i in 0..n {
            let (Some(open), Some(high), Some(low), Some(close)) =
                (raw.open[i], raw.high[i], raw.low[i], raw.close[i])
            else {
                continue;
            };

            let time = raw.timestamps[i];
            candles.push(CandlePoint {
                time,
                open: round_to_cents(open),
                high: round_to_cents(high),
                low: round_to_cents(low),
                close: round_to_cents(close),
            });

            if let Some(value) = raw.volume[i] {
                let color = if close >= open {
                    VolumeColor::Up
                } else {
                    VolumeColor::Down
                };
                volumes.push(VolumePoint { time, value, color });
            }
        }

        Ok(FormattedSeries { candles, volumes })
    }

    fn check_len(field: &str, len: usize, expected: usize) -> Result<(), QuoteError> {
        if len == expected {
            Ok(())
        } else {
            Err(QuoteError::MalformedSeries(format!(
                "{field} array has {len} entries for {expected} timestamps"
            )))
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

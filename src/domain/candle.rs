use serde::{Deserialize, Serialize};

/// Direction tint for a volume bar, decided by the candle it sits under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeColor {
    Up,
    Down,
}

/// One OHLC price record for a single time bucket. `time` is epoch seconds,
/// prices are already rounded to display precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandlePoint {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        if self.is_bullish() {
            (self.open, self.close)
        } else {
            (self.close, self.open)
        }
    }
}

/// Traded volume for one bucket. Only ever exists alongside a valid candle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub time: i64,
    pub value: i64,
    pub color: VolumeColor,
}

/// Chart-ready output: candles plus the volume bars that survived filtering.
/// Volumes are index-aligned by time with a subset of the candles, never the
/// other way around.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattedSeries {
    pub candles: Vec<CandlePoint>,
    pub volumes: Vec<VolumePoint>,
}

impl FormattedSeries {
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// (lowest low, highest high) across all candles.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for c in &self.candles {
            bounds = Some(match bounds {
                None => (c.low, c.high),
                Some((lo, hi)) => (lo.min(c.low), hi.max(c.high)),
            });
        }
        bounds
    }

    pub fn max_volume(&self) -> i64 {
        self.volumes.iter().map(|v| v.value).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_range_orients_by_direction() {
        let bull = CandlePoint { time: 0, open: 10.0, high: 12.0, low: 9.0, close: 11.0 };
        assert!(bull.is_bullish());
        assert_eq!(bull.body_range(), (10.0, 11.0));

        let bear = CandlePoint { time: 0, open: 11.0, high: 12.0, low: 9.0, close: 10.0 };
        assert!(!bear.is_bullish());
        assert_eq!(bear.body_range(), (10.0, 11.0));
    }

    #[test]
    fn price_bounds_span_all_candles() {
        let series = FormattedSeries {
            candles: vec![
                CandlePoint { time: 1, open: 10.0, high: 15.0, low: 8.0, close: 12.0 },
                CandlePoint { time: 2, open: 12.0, high: 13.0, low: 5.0, close: 6.0 },
            ],
            volumes: vec![],
        };
        assert_eq!(series.price_bounds(), Some((5.0, 15.0)));
        assert_eq!(FormattedSeries::default().price_bounds(), None);
    }
}

//! Interval and navigation enums shared across the app.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Relative lookback window sent to the quote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default)]
pub enum RangePreset {
    M1,
    M3,
    M6,
    #[default]
    Y1,
    Y2,
    Y5,
}

impl RangePreset {
    /// Query-string token the endpoint expects.
    pub fn token(&self) -> &'static str {
        match self {
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y2 => "2y",
            Self::Y5 => "5y",
        }
    }
}

impl std::fmt::Display for RangePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::M1 => write!(f, "1M"),
            Self::M3 => write!(f, "3M"),
            Self::M6 => write!(f, "6M"),
            Self::Y1 => write!(f, "1Y"),
            Self::Y2 => write!(f, "2Y"),
            Self::Y5 => write!(f, "5Y"),
        }
    }
}

/// Width of one candle bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default)]
pub enum CandleResolution {
    #[default]
    D1,
    W1,
    MO1,
}

impl CandleResolution {
    pub fn token(&self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::W1 => "1wk",
            Self::MO1 => "1mo",
        }
    }
}

impl std::fmt::Display for CandleResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::D1 => write!(f, "1D"),
            Self::W1 => write!(f, "1W"),
            Self::MO1 => write!(f, "1M"),
        }
    }
}

/// What previous/next do at the ends of the catalog. Wraparound is the
/// canonical behavior; clamping reproduces the variant deployments that
/// stopped at the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
pub enum NavPolicy {
    #[default]
    Wrap,
    Clamp,
}

//! Wire format of the v8 chart endpoint.
//!
//! The payload nests the series under `chart.result[0]`, with timestamps and
//! per-field arrays living in parallel. Individual slots are nullable
//! (halted sessions, missing buckets), so everything deserializes to
//! `Option`.

use serde::Deserialize;

use crate::error::QuoteError;

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: ChartNode,
}

#[derive(Debug, Deserialize)]
pub struct ChartNode {
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<i64>>,
}

/// The parallel-array series extracted from the envelope, still unvalidated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawQuoteSeries {
    pub timestamps: Vec<i64>,
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub volume: Vec<Option<i64>>,
}

impl ChartEnvelope {
    /// Unwrap the nesting down to the parallel arrays. Structural absence at
    /// any level is a malformed payload; length mismatches are checked later
    /// by the formatter.
    pub fn into_series(self) -> Result<RawQuoteSeries, QuoteError> {
        if let Some(err) = &self.chart.error {
            if !err.is_null() {
                return Err(QuoteError::MalformedSeries(format!("endpoint error: {err}")));
            }
        }

        let mut results = self
            .chart
            .result
            .ok_or_else(|| QuoteError::MalformedSeries("missing chart.result".into()))?;
        if results.is_empty() {
            return Err(QuoteError::MalformedSeries("empty chart.result".into()));
        }
        let first = results.swap_remove(0);

        let timestamps = first
            .timestamp
            .ok_or_else(|| QuoteError::MalformedSeries("missing timestamp array".into()))?;
        let block = first
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| QuoteError::MalformedSeries("missing indicators.quote block".into()))?;

        Ok(RawQuoteSeries {
            timestamps,
            open: block.open,
            high: block.high,
            low: block.low,
            close: block.close,
            volume: block.volume,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"currency": "INR", "symbol": "RELIANCE.NS"},
                "timestamp": [100, 200],
                "indicators": {
                    "quote": [{
                        "open": [10.0, null],
                        "high": [12.0, 11.0],
                        "low": [9.0, 9.0],
                        "close": [11.0, 10.0],
                        "volume": [500, 600]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn extracts_parallel_arrays_from_nested_payload() {
        let envelope: ChartEnvelope = serde_json::from_str(FIXTURE).unwrap();
        let series = envelope.into_series().unwrap();
        assert_eq!(series.timestamps, vec![100, 200]);
        assert_eq!(series.open, vec![Some(10.0), None]);
        assert_eq!(series.volume, vec![Some(500), Some(600)]);
    }

    #[test]
    fn null_result_is_malformed() {
        let envelope: ChartEnvelope = serde_json::from_str(
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data"}}}"#,
        )
        .unwrap();
        let err = envelope.into_series().unwrap_err();
        assert!(matches!(err, QuoteError::MalformedSeries(_)));
    }

    #[test]
    fn missing_timestamp_array_is_malformed() {
        let envelope: ChartEnvelope = serde_json::from_str(
            r#"{"chart":{"result":[{"indicators":{"quote":[{}]}}],"error":null}}"#,
        )
        .unwrap();
        let err = envelope.into_series().unwrap_err();
        assert!(matches!(err, QuoteError::MalformedSeries(msg) if msg.contains("timestamp")));
    }
}

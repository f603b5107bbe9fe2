use {
    crate::{
        config::{CandleResolution, RangePreset, YAHOO},
        error::QuoteError,
    },
    async_trait::async_trait,
    std::time::Duration,
};

use super::quote::{ChartEnvelope, RawQuoteSeries};

/// Abstract interface for fetching quote series.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the raw series for one exchange-suffixed symbol over a relative
    /// range at the given candle resolution.
    async fn fetch_series(
        &self,
        symbol: &str,
        range: RangePreset,
        resolution: CandleResolution,
    ) -> Result<RawQuoteSeries, QuoteError>;
}

pub struct YahooProvider {
    client: reqwest::Client,
}

impl YahooProvider {
    pub fn new() -> Result<Self, QuoteError> {
        let client = reqwest::Client::builder()
            .user_agent(YAHOO.client.user_agent)
            .timeout(Duration::from_millis(YAHOO.client.timeout_ms))
            .build()?;
        Ok(Self { client })
    }

    fn chart_url(symbol: &str, range: RangePreset, resolution: CandleResolution) -> String {
        format!(
            "{}/v8/finance/chart/{}{}?interval={}&range={}",
            YAHOO.base_url,
            symbol,
            YAHOO.symbol_suffix,
            resolution.token(),
            range.token()
        )
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    async fn fetch_series(
        &self,
        symbol: &str,
        range: RangePreset,
        resolution: CandleResolution,
    ) -> Result<RawQuoteSeries, QuoteError> {
        let url = Self::chart_url(symbol, range, resolution);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let envelope: ChartEnvelope = response.json().await?;
        envelope.into_series()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_carries_suffix_and_interval_tokens() {
        let url =
            YahooProvider::chart_url("RELIANCE", RangePreset::Y1, CandleResolution::D1);
        assert_eq!(
            url,
            "https://query1.finance.yahoo.com/v8/finance/chart/RELIANCE.NS?interval=1d&range=1y"
        );
    }
}

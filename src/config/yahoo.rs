/// HTTP client defaults for the quote endpoint.
pub struct QuoteClientDefaults {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

pub struct YahooConfig {
    /// Host for the v8 chart endpoint.
    pub base_url: &'static str,
    /// Exchange suffix appended to every catalog symbol (NSE listings).
    pub symbol_suffix: &'static str,
    pub client: QuoteClientDefaults,
}

pub const YAHOO: YahooConfig = YahooConfig {
    base_url: "https://query1.finance.yahoo.com",
    symbol_suffix: ".NS",
    client: QuoteClientDefaults {
        timeout_ms: 10_000,
        user_agent: "chart-hopper/0.1",
    },
};

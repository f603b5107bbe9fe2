//! Every user-facing string in one place.

pub struct UiText {
    pub app_name: &'static str,
    pub window_title: &'static str,

    pub prev: &'static str,
    pub next: &'static str,
    pub fullscreen_icon: &'static str,

    pub search_hint: &'static str,

    pub chart_placeholder: &'static str,
    pub no_data_prefix: &'static str,
    pub quote_failed: &'static str,
    pub fetching: &'static str,

    pub loading_heading: &'static str,
    pub loading_detail: &'static str,
    pub error_heading: &'static str,
    pub retry: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_name: "Chart Hopper",
    window_title: "Chart Hopper - flip through the market",

    prev: "\u{25c0} Prev",
    next: "Next \u{25b6}",
    fullscreen_icon: "\u{26f6}",

    search_hint: "Search symbol or company",

    chart_placeholder: "Pick a symbol to chart",
    no_data_prefix: "No chart data for",
    quote_failed: "Quote fetch failed",
    fetching: "fetching...",

    loading_heading: "Loading symbol catalog",
    loading_detail: "Reading the cache slot or fetching the list...",
    error_heading: "Catalog unavailable",
    retry: "Retry",
};

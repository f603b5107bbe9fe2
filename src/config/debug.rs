//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every pager move and the index it lands on.
    pub log_navigation: bool,

    /// Log quote fetch issue/arrival, including discarded stale responses.
    pub log_fetches: bool,

    /// Log debounced search passes and hit counts.
    pub log_search: bool,

    /// Log catalog cache slot reads/writes.
    pub log_cache: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetches: true,

    log_navigation: false,
    log_search: false,
    log_cache: false,
};

/// Where the symbol list comes from and how search behaves over it.
pub struct CatalogConfig {
    /// Default catalog resource. A plain path is read from disk; anything
    /// starting with http(s) is fetched. Overridable with `--catalog`.
    pub resource: &'static str,
}

pub struct SearchConfig {
    /// Keystroke quiet period before a filter pass runs.
    pub debounce_ms: u64,
    /// How many hits the result popup shows.
    pub max_results: usize,
}

pub const CATALOG: CatalogConfig = CatalogConfig {
    resource: "bse500.json",
};

pub const SEARCH: SearchConfig = SearchConfig {
    debounce_ms: 300,
    max_results: 50,
};

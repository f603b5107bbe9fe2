//! Error taxonomy for catalog loading and quote fetching.

use thiserror::Error;

/// Everything that can go wrong while loading or addressing the symbol catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog resource contained no symbols")]
    EmptyCatalog,

    #[error("index {index} out of range for catalog of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("symbol not in catalog: {0}")]
    SymbolNotFound(String),
}

/// Quote-series failures. Transport and shape problems both land here so the
/// UI can collapse them into a single "no data" state.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("quote payload malformed: {0}")]
    MalformedSeries(String),

    #[error("quote worker failed: {0}")]
    Worker(String),
}

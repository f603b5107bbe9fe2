mod catalog;
mod formatter;
mod provider;
mod quote;

pub use {
    catalog::{CatalogLoad, CatalogSource, SymbolCatalog, load_catalog},
    formatter::QuoteFormatter,
    provider::{QuoteProvider, YahooProvider},
    quote::RawQuoteSeries,
};

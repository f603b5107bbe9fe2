//! Configuration module for the chart-hopper application.

// Can all be private now because we have a public re-export.
mod catalog;
mod debug;
mod persistence;
mod types;
mod yahoo;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use catalog::{CATALOG, SEARCH};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use types::{CandleResolution, NavPolicy, RangePreset};
pub use yahoo::YAHOO;

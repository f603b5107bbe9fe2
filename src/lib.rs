#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod search;
pub mod session;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use config::PERSISTENCE;
pub use data::{QuoteFormatter, SymbolCatalog};
pub use session::Pager;

// CLI argument parsing
use clap::Parser;

use crate::config::NavPolicy;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fetch the symbol catalog from the network even when a cache slot exists
    #[arg(long, default_value_t = false)]
    pub prefer_api: bool,

    /// Override the catalog resource (a file path or an http(s) URL)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Boundary behavior for previous/next paging
    #[arg(long, value_enum, default_value_t = NavPolicy::Wrap)]
    pub nav_policy: NavPolicy,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

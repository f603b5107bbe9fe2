mod panels;
mod screens;
mod search_box;
mod ui_config;
mod ui_text;

pub use ui_config::UI_CONFIG;
pub use ui_text::UI_TEXT;

pub(crate) use {
    screens::{render_failed, render_loading},
    search_box::SearchState,
    ui_config::apply_visuals,
};

mod debounce;
mod focus;
mod index;

pub use {
    debounce::Debouncer,
    focus::ResultFocus,
    index::{SearchHit, SearchIndex},
};

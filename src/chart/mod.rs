mod plot;
mod presenter;
mod surface;

pub use {plot::CandlePlot, presenter::ChartPresenter, surface::ChartSurface};

/// Startup and steady-state phases. Loading covers the catalog bootstrap;
/// Failed parks on the retry screen without taking the rest of the app down.
#[derive(Debug, Default)]
pub(crate) enum AppPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key, ViewportCommand},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::mpsc::{self, Receiver, TryRecvError},
        thread,
        time::{Duration, Instant},
    },
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    app::{AppPhase, QuoteFetcher},
    chart::ChartPresenter,
    config::{CandleResolution, RangePreset},
    data::{CatalogLoad, load_catalog},
    error::CatalogError,
    search::SearchIndex,
    session::Session,
    ui::{SearchState, UI_TEXT, apply_visuals, render_failed, render_loading},
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Persisted across sessions.
    pub(crate) range: RangePreset,
    pub(crate) resolution: CandleResolution,
    pub(crate) persisted_symbol: Option<String>,

    #[serde(skip)]
    pub(crate) session: Option<Session>,
    #[serde(skip)]
    phase: AppPhase,
    #[serde(skip)]
    catalog_rx: Option<Receiver<Result<CatalogLoad, CatalogError>>>,
    #[serde(skip)]
    pub(crate) fetcher: QuoteFetcher,
    #[serde(skip)]
    pub(crate) presenter: ChartPresenter,
    #[serde(skip)]
    pub(crate) search: SearchState,
    #[serde(skip)]
    pub(crate) status_line: Option<String>,
    #[serde(skip)]
    fullscreen: bool,
    #[serde(skip)]
    args: Cli,
}

impl Default for App {
    fn default() -> Self {
        Self {
            range: RangePreset::default(),
            resolution: CandleResolution::default(),
            persisted_symbol: None,
            session: None,
            phase: AppPhase::default(),
            catalog_rx: None,
            fetcher: QuoteFetcher::default(),
            presenter: ChartPresenter::default(),
            search: SearchState::default(),
            status_line: None,
            fullscreen: false,
            args: Cli::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.args = args;
        app.spawn_catalog_load();
        app
    }

    /// Catalog bootstrap runs off the GUI thread and reports back over a
    /// channel polled by the Loading phase.
    fn spawn_catalog_load(&mut self) {
        let (tx, rx) = mpsc::channel();
        self.catalog_rx = Some(rx);

        let prefer_api = self.args.prefer_api;
        let resource = self.args.catalog.clone();

        thread::spawn(move || {
            let outcome = match Runtime::new() {
                Ok(rt) => rt.block_on(load_catalog(prefer_api, resource.as_deref())),
                Err(e) => Err(CatalogError::Io(e)),
            };
            let _ = tx.send(outcome);
        });
    }

    pub(crate) fn navigate_previous(&mut self) {
        let Some(session) = &mut self.session else { return };
        if session.pager_mut().previous() {
            #[cfg(debug_assertions)]
            if DF.log_navigation {
                log::info!("pager back to {}", session.pager().label());
            }
            self.request_render();
        }
    }

    pub(crate) fn navigate_next(&mut self) {
        let Some(session) = &mut self.session else { return };
        if session.pager_mut().next() {
            #[cfg(debug_assertions)]
            if DF.log_navigation {
                log::info!("pager forward to {}", session.pager().label());
            }
            self.request_render();
        }
    }

    /// One user action, one render request. The fetch lands later via
    /// `pump_quote_results`.
    pub(crate) fn request_render(&mut self) {
        let Some(record) = self.session.as_ref().and_then(|s| s.selected()) else {
            return;
        };
        let symbol = record.symbol.clone();
        self.fetcher.issue(symbol, self.range, self.resolution);
    }

    pub(crate) fn activate_search_result(&mut self, symbol: &str) {
        let Some(session) = &mut self.session else { return };
        match session.select_symbol(symbol) {
            Ok(_) => {
                self.search.close();
                self.request_render();
            }
            Err(e) => {
                // Defensive: hits come from the same catalog, so a miss here
                // means the result list went stale somehow.
                log::warn!("search activation failed: {e}");
                self.status_line = Some(e.to_string());
            }
        }
    }

    pub(crate) fn toggle_fullscreen(&mut self, ctx: &Context) {
        self.fullscreen = !self.fullscreen;
        ctx.send_viewport_cmd(ViewportCommand::Fullscreen(self.fullscreen));
    }

    fn tick_loading(&mut self, ctx: &Context) -> AppPhase {
        if let Some(rx) = &self.catalog_rx {
            match rx.try_recv() {
                Ok(Ok(load)) => return self.finish_catalog_load(load),
                Ok(Err(e)) => {
                    log::error!("catalog load failed: {e}");
                    self.catalog_rx = None;
                    return AppPhase::Failed(e.to_string());
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.catalog_rx = None;
                    return AppPhase::Failed("catalog loader stopped without a result".into());
                }
            }
        }

        render_loading(ctx);
        ctx.request_repaint();
        AppPhase::Loading
    }

    fn finish_catalog_load(&mut self, load: CatalogLoad) -> AppPhase {
        log::info!(
            "catalog ready: {} symbols ({})",
            load.catalog.len(),
            load.source
        );

        let mut session = Session::new(load.catalog, self.args.nav_policy);
        if let Some(symbol) = self.persisted_symbol.clone() {
            session.restore_symbol(&symbol);
        }
        self.session = Some(session);
        self.catalog_rx = None;

        self.request_render();
        AppPhase::Ready
    }

    fn tick_failed(&mut self, ctx: &Context, message: String) -> AppPhase {
        if render_failed(ctx, &message) {
            self.spawn_catalog_load();
            ctx.request_repaint();
            return AppPhase::Loading;
        }
        AppPhase::Failed(message)
    }

    /// READY PHASE MAIN LOOP
    fn tick_ready(&mut self, ctx: &Context) -> AppPhase {
        self.pump_quote_results(ctx);
        self.pump_search();
        self.handle_global_shortcuts(ctx);

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        if self.fetcher.in_flight() || self.search.debouncer.is_pending() {
            // Promises and debounce deadlines don't wake egui on their own.
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        AppPhase::Ready
    }

    fn pump_quote_results(&mut self, ctx: &Context) {
        let Some(outcome) = self.fetcher.poll() else { return };

        match outcome.result {
            Ok(raw) => match self.presenter.present(&outcome.symbol, &raw) {
                Ok(title) => {
                    ctx.send_viewport_cmd(ViewportCommand::Title(title));
                    self.status_line = None;
                }
                Err(e) => {
                    log::warn!("{}: {e}", outcome.symbol);
                    self.presenter.clear();
                    self.status_line =
                        Some(format!("{} {}", UI_TEXT.no_data_prefix, outcome.symbol));
                }
            },
            Err(e) => {
                log::warn!("quote fetch for {} failed: {e}", outcome.symbol);
                self.presenter.clear();
                self.status_line = Some(format!("{}: {e}", UI_TEXT.quote_failed));
            }
        }
    }

    fn pump_search(&mut self) {
        let Some(query) = self.search.debouncer.poll(Instant::now()) else {
            return;
        };
        let Some(session) = &self.session else { return };

        let hits = SearchIndex::filter(session.catalog(), &query);

        #[cfg(debug_assertions)]
        if DF.log_search {
            log::info!("search '{}': {} hits", query, hits.len());
        }

        self.search.results = hits;
        let visible = self.search.visible_count();
        self.search.focus.clamp_to(visible);
    }

    fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // If the user is typing in the search box, don't trigger global hotkeys.
            return;
        }

        let (prev, next, fullscreen) = ctx.input(|i| {
            (
                i.key_pressed(Key::ArrowLeft),
                i.key_pressed(Key::ArrowRight),
                i.key_pressed(Key::F11),
            )
        });

        if prev {
            self.navigate_previous();
        }
        if next {
            self.navigate_next();
        }
        if fullscreen {
            self.toggle_fullscreen(ctx);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        apply_visuals(ctx);
        let current = mem::take(&mut self.phase);
        self.phase = match current {
            AppPhase::Loading => self.tick_loading(ctx),
            AppPhase::Failed(message) => self.tick_failed(ctx, message),
            AppPhase::Ready => self.tick_ready(ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.persisted_symbol = self
            .session
            .as_ref()
            .and_then(|s| s.selected())
            .map(|record| record.symbol.clone());
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

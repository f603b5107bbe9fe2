//! Free-text search over the catalog: debounced filtering, a result popup,
//! and keyboard traversal of the hits.

use std::time::{Duration, Instant};

use eframe::egui::{Area, Frame, Id, Key, Order, TextEdit, Ui, vec2};

use crate::{
    app::App,
    config::SEARCH,
    search::{Debouncer, ResultFocus, SearchHit},
    ui::UI_TEXT,
};

pub(crate) struct SearchState {
    pub query: String,
    pub debouncer: Debouncer,
    pub results: Vec<SearchHit>,
    pub focus: ResultFocus,
    pub open: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            debouncer: Debouncer::new(Duration::from_millis(SEARCH.debounce_ms)),
            results: Vec::new(),
            focus: ResultFocus::default(),
            open: false,
        }
    }
}

impl SearchState {
    /// Rows actually shown in the popup (the filter itself is uncapped).
    pub fn visible_count(&self) -> usize {
        self.results.len().min(SEARCH.max_results)
    }

    pub fn close(&mut self) {
        self.open = false;
        self.focus.reset();
    }
}

impl App {
    pub(crate) fn render_search_box(&mut self, ui: &mut Ui) {
        let response = ui.add(
            TextEdit::singleline(&mut self.search.query)
                .hint_text(UI_TEXT.search_hint)
                .desired_width(220.0),
        );

        if response.changed() {
            // Each keystroke reschedules; only the last one inside the quiet
            // window will actually filter.
            self.search
                .debouncer
                .schedule(self.search.query.clone(), Instant::now());
            self.search.open = true;
            if self.search.query.is_empty() {
                self.search.close();
                self.search.debouncer.cancel();
                self.search.results.clear();
            }
        }

        let mut chosen: Option<String> = None;

        if response.has_focus() {
            let count = self.search.visible_count();
            let (down, up, enter, escape) = ui.input(|i| {
                (
                    i.key_pressed(Key::ArrowDown),
                    i.key_pressed(Key::ArrowUp),
                    i.key_pressed(Key::Enter),
                    i.key_pressed(Key::Escape),
                )
            });

            if down {
                self.search.focus.move_down(count);
                self.search.open = true;
            }
            if up {
                self.search.focus.move_up(count);
                self.search.open = true;
            }
            if enter {
                if let Some(k) = self.search.focus.focused() {
                    chosen = self.search.results.get(k).map(|hit| hit.symbol.clone());
                }
            }
            if escape {
                self.search.close();
            }
        }

        if self.search.open && !self.search.results.is_empty() {
            let below = response.rect.left_bottom() + vec2(0.0, 4.0);
            Area::new(Id::new("search_results"))
                .fixed_pos(below)
                .order(Order::Foreground)
                .show(ui.ctx(), |ui| {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_min_width(280.0);

                        for (k, hit) in self
                            .search
                            .results
                            .iter()
                            .take(SEARCH.max_results)
                            .enumerate()
                        {
                            let focused = self.search.focus.focused() == Some(k);
                            let text = match &hit.company_name {
                                Some(name) => format!("{} ({})", hit.symbol, name),
                                None => hit.symbol.clone(),
                            };
                            if ui.selectable_label(focused, text).clicked() {
                                chosen = Some(hit.symbol.clone());
                            }
                        }

                        let hidden = self.search.results.len().saturating_sub(SEARCH.max_results);
                        if hidden > 0 {
                            ui.weak(format!("... {hidden} more"));
                        }
                    });
                });
        }

        if let Some(symbol) = chosen {
            self.activate_search_result(&symbol);
        }
    }
}

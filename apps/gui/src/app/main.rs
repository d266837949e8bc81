use crate::component::{
    self, ContextComponent, ResultsModalEvent, SearchBarEvent,
};
use crate::config::Config;
use doc_search::{SearchHit, Searcher};
use tracing::{info, warn};

pub struct App {
    config: Config,
    searcher: Searcher,

    s: State,
    search_bar: component::SearchBar,
    results_modal: component::ResultsModal,
}

#[derive(Default)]
struct State {
    /// Whether this application finishes initialization
    initialized: bool,

    /// Outcome of the last search, shown in the results modal until
    /// dismissed
    outcome: Option<SearchOutcome>,
}

pub enum SearchOutcome {
    Matches { query: String, hits: Vec<SearchHit> },
    NoMatches { query: String },
    Failed { query: String, message: String },
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config, searcher: Searcher) -> Self {
        Self {
            config,
            searcher,
            s: State::default(),
            search_bar: Default::default(),
            results_modal: Default::default(),
        }
    }

    /// Run the search synchronously; the UI blocks for the duration,
    /// which is fine at the corpus sizes this tool targets.
    fn run_search(&mut self, query: String) {
        info!("searching corpus for {query:?}");

        let outcome = match self.searcher.search(&query) {
            Ok(hits) if hits.is_empty() => SearchOutcome::NoMatches { query },
            Ok(hits) => SearchOutcome::Matches { query, hits },
            Err(e) => {
                warn!("search failed: {e}");
                SearchOutcome::Failed {
                    query,
                    message: e.to_string(),
                }
            }
        };

        self.s.outcome = Some(outcome);
    }

    fn render_search_bar(&mut self, ctx: &egui::Context) {
        let props = component::SearchBarProps {
            draw_separate_line: true,
        };
        let output = self.search_bar.render(ctx, props);

        for event in output.events {
            match event {
                SearchBarEvent::StartSearch(query) => self.run_search(query),
            }
        }
    }

    fn render_results_modal(&mut self, ctx: &egui::Context) {
        let Some(outcome) = &self.s.outcome else {
            return;
        };

        let props = component::ResultsModalProps { outcome };
        let output = self.results_modal.render(ctx, props);

        for event in output.events {
            match event {
                ResultsModalEvent::Dismissed => {
                    self.s.outcome = None;
                    self.search_bar.request_focus();
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.s.initialized {
            self.search_bar.request_focus();

            self.s.initialized = true;
        }

        self.render_search_bar(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(10.0, 6.0))
                    .fill(ctx.style().visuals.panel_fill),
            )
            .show(ctx, |ui| {
                ui.label(format!(
                    "Corpus: {}",
                    self.config.search.corpus_dir.display()
                ));
                ui.weak("Type a term and press Enter, or click Search.");
            });

        self.render_results_modal(ctx);
    }
}

use crate::client::SearchApi;
use crate::config::SearchConfig;
use crate::params::RequestParameters;
use crate::render::{ArticleLinker, ResultCard};
use crate::view::{KeyEvent, SearchView};

/// What a submission ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty; nothing happened.
    Skipped,
    /// The controls are disabled, so the submit was refused.
    Blocked,
    /// The search succeeded and this many cards were rendered.
    Rendered(usize),
    /// The search failed; this message is in the error region.
    Failed(String),
}

/// Reads the input, runs one search at a time and renders the outcome into
/// the view.
pub struct SearchWidget<A, V> {
    api: A,
    view: V,
    base: RequestParameters,
    linker: ArticleLinker,
    busy: bool,
}

impl<A: SearchApi, V: SearchView> SearchWidget<A, V> {
    pub fn new(api: A, view: V, base: RequestParameters, linker: ArticleLinker) -> Self {
        SearchWidget {
            api,
            view,
            base,
            linker,
            busy: false,
        }
    }

    pub fn from_config(api: A, view: V, config: &SearchConfig) -> Self {
        Self::new(
            api,
            view,
            RequestParameters::from_config(config),
            ArticleLinker::new(config.article_base.clone()),
        )
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Runs one search for the current input.
    ///
    /// Blocked while the controls are disabled, whoever disabled them. The
    /// controls are re-enabled even if this future is dropped mid-request.
    pub async fn submit_search(&mut self) -> SubmitOutcome {
        if self.view.controls_disabled() {
            log::debug!("controls disabled, ignoring submit");
            return SubmitOutcome::Blocked;
        }

        let term = self.view.input_text();
        if term.trim().is_empty() {
            return SubmitOutcome::Skipped;
        }

        self.view.clear_results();
        self.view.clear_error();

        let params = self.base.with_term(&term);
        let mut guard = BusyGuard::engage(&mut self.busy, &mut self.view);
        log::info!("searching for {term:?}");

        let outcome = match self.api.search(&params).await {
            Ok(results) => {
                let count = results.len();
                for result in results {
                    guard.view.append_result(ResultCard::new(result, &self.linker));
                }
                log::info!("rendered {count} results for {term:?}");
                SubmitOutcome::Rendered(count)
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!("search for {term:?} failed: {:#}", e);
                guard.view.show_error(&message);
                SubmitOutcome::Failed(message)
            }
        };

        drop(guard);
        outcome
    }

    /// Enter submits; any other key is ignored and yields `None`.
    pub async fn on_key_down(&mut self, event: &KeyEvent) -> Option<SubmitOutcome> {
        if !event.is_enter() {
            return None;
        }
        Some(self.submit_search().await)
    }

    pub async fn on_submit_click(&mut self) -> SubmitOutcome {
        self.submit_search().await
    }
}

/// Holds the widget busy with its controls disabled until dropped.
struct BusyGuard<'a, V: SearchView> {
    busy: &'a mut bool,
    view: &'a mut V,
}

impl<'a, V: SearchView> BusyGuard<'a, V> {
    fn engage(busy: &'a mut bool, view: &'a mut V) -> Self {
        *busy = true;
        view.set_controls_disabled(true);
        BusyGuard { busy, view }
    }
}

impl<V: SearchView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        *self.busy = false;
        self.view.set_controls_disabled(false);
    }
}

use axum::extract::{Query, State};
use maud::Markup;
use std::sync::Arc;

use crate::render;
use crate::view::HtmlRegions;
use crate::widget::{SearchWidget, SubmitOutcome};

use super::AppState;
use super::models::SearchParams;

/// Renders the search page. The form submits back here with `q`, which plays
/// the part of the submit action.
pub async fn page_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Markup {
    let regions = HtmlRegions::with_input(params.q.unwrap_or_default());
    let mut widget = SearchWidget::from_config(state.api.clone(), regions, &state.config);

    match widget.on_submit_click().await {
        SubmitOutcome::Skipped => {}
        outcome => log::info!("page search finished: {:?}", outcome),
    }

    render::page(widget.view())
}

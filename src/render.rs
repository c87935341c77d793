use maud::{DOCTYPE, Markup, PreEscaped, Render, html};

use crate::data_models::SearchResult;
use crate::view::HtmlRegions;

/// Builds canonical article links from page ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLinker {
    base: String,
}

impl ArticleLinker {
    pub fn new(base: impl Into<String>) -> ArticleLinker {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        ArticleLinker { base }
    }

    pub fn link(&self, page_id: u64) -> String {
        format!("{}?curid={}", self.base, page_id)
    }
}

impl Default for ArticleLinker {
    fn default() -> Self {
        ArticleLinker::new(crate::config::DEFAULT_ARTICLE_BASE)
    }
}

/// A result paired with its link, ready to go into the results region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub result: SearchResult,
    pub href: String,
}

impl ResultCard {
    pub fn new(result: SearchResult, linker: &ArticleLinker) -> ResultCard {
        let href = linker.link(result.page_id);
        ResultCard { result, href }
    }
}

impl Render for ResultCard {
    fn render(&self) -> Markup {
        html! {
            div class="results__item" {
                a href=(self.href) target="_blank" rel="noopener" class="card" {
                    h2 class="results__item__title" { (self.result.title) }
                    p class="results__item__intro" { (self.result.intro) }
                }
            }
        }
    }
}

pub fn result_card(result: &SearchResult, linker: &ArticleLinker) -> Markup {
    ResultCard::new(result.clone(), linker).render()
}

pub fn error_message(message: &str) -> Markup {
    html! { (message) }
}

/// Whole document: the form, the error region and the results region.
pub fn page(regions: &HtmlRegions) -> Markup {
    let disabled = regions.is_disabled();
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Wikipedia search" }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                form class="search" method="get" action="/" {
                    input id="input" type="text" name="q" value=(regions.input_value())
                        placeholder="Search Wikipedia" autofocus disabled[disabled];
                    button id="submit" type="submit" disabled[disabled] { "Search" }
                }
                div id="error" class="error" { (error_message(regions.error_text())) }
                div id="results" class="results" { (PreEscaped(regions.results_html())) }
            }
        }
    }
}

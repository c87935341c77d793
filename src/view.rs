use maud::Render;

use crate::render::ResultCard;

/// The four UI regions the widget drives: the input, the controls' disabled
/// state, the error region and the results region.
pub trait SearchView: Send {
    fn input_text(&self) -> String;

    fn set_controls_disabled(&mut self, disabled: bool);

    fn controls_disabled(&self) -> bool;

    fn clear_results(&mut self);

    fn clear_error(&mut self);

    fn show_error(&mut self, message: &str);

    fn append_result(&mut self, card: ResultCard);
}

/// A key-down on the input control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> KeyEvent {
        KeyEvent { key: key.into() }
    }

    pub fn is_enter(&self) -> bool {
        self.key == "Enter"
    }
}

/// In-memory regions holding rendered HTML fragments.
#[derive(Debug, Clone, Default)]
pub struct HtmlRegions {
    input: String,
    disabled: bool,
    error: String,
    results: Vec<String>,
}

impl HtmlRegions {
    pub fn new() -> HtmlRegions {
        HtmlRegions::default()
    }

    pub fn with_input(input: impl Into<String>) -> HtmlRegions {
        HtmlRegions {
            input: input.into(),
            ..HtmlRegions::default()
        }
    }

    pub fn input_value(&self) -> &str {
        &self.input
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn error_text(&self) -> &str {
        &self.error
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn results_html(&self) -> String {
        self.results.concat()
    }
}

impl SearchView for HtmlRegions {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_controls_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn controls_disabled(&self) -> bool {
        self.disabled
    }

    fn clear_results(&mut self) {
        self.results.clear();
    }

    fn clear_error(&mut self) {
        self.error.clear();
    }

    fn show_error(&mut self, message: &str) {
        self.error = message.to_string();
    }

    fn append_result(&mut self, card: ResultCard) {
        self.results.push(card.render().into_string());
    }
}

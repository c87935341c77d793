use serde::Deserialize;

/// Query string of the search page; `q` is the submitted input.
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SearchError;

/// One rendered hit. Lives only until the next search clears the results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub page_id: u64,
    pub title: String,
    pub intro: String,
}

impl SearchResult {
    pub fn new(page_id: u64, title: impl Into<String>, intro: impl Into<String>) -> SearchResult {
        SearchResult {
            page_id,
            title: title.into(),
            intro: intro.into(),
        }
    }
}

/// Body of an `action=query` response.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiResponse {
    #[serde(default)]
    pub error: Option<ApiError>,
    #[serde(default)]
    pub query: Option<QueryBlock>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct QueryBlock {
    /// Keyed by page id; iteration follows the order of the JSON object.
    #[serde(default)]
    pub pages: Map<String, Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PageEntry {
    pub pageid: u64,
    pub title: String,
    #[serde(default)]
    pub extract: String,
}

impl From<PageEntry> for SearchResult {
    fn from(page: PageEntry) -> Self {
        SearchResult {
            page_id: page.pageid,
            title: page.title,
            intro: page.extract,
        }
    }
}

impl ApiResponse {
    /// Turns the body into results in the order the API listed the pages.
    ///
    /// An embedded `error` wins over any `query` block. A body without a
    /// `query` block is what the API sends when nothing matched.
    pub fn into_results(self) -> Result<Vec<SearchResult>, SearchError> {
        if let Some(err) = self.error {
            return Err(SearchError::Api {
                code: err.code,
                info: err.info,
            });
        }

        let Some(query) = self.query else {
            return Ok(Vec::new());
        };

        query
            .pages
            .into_iter()
            .map(|(_, page)| {
                let page: PageEntry = serde_json::from_value(page)?;
                Ok(page.into())
            })
            .collect()
    }
}

use anyhow::Context;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::SearchConfig;
use crate::data_models::{ApiResponse, SearchResult};
use crate::error::SearchError;
use crate::params::RequestParameters;

/// The remote text-search service, as seen by the widget.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, params: &RequestParameters) -> Result<Vec<SearchResult>, SearchError>;
}

#[async_trait]
impl<T: SearchApi + ?Sized> SearchApi for Arc<T> {
    async fn search(&self, params: &RequestParameters) -> Result<Vec<SearchResult>, SearchError> {
        (**self).search(params).await
    }
}

/// `SearchApi` over the MediaWiki `api.php` endpoint.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> WikipediaClient {
        WikipediaClient {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> anyhow::Result<WikipediaClient> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(WikipediaClient::new(http, config.endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchApi for WikipediaClient {
    async fn search(&self, params: &RequestParameters) -> Result<Vec<SearchResult>, SearchError> {
        log::debug!("GET {} term={:?}", self.endpoint, params.term());
        let res = self
            .http
            .get(&self.endpoint)
            .query(&params.to_query_pairs())
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = res.text().await?;
        parse_response(&body)
    }
}

/// Decodes a raw response body into results.
pub fn parse_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let response: ApiResponse = serde_json::from_str(body)?;
    response.into_results()
}

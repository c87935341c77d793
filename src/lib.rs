pub mod api;
pub mod client;
pub mod config;
pub mod data_models;
pub mod error;
pub mod params;
pub mod render;
pub mod view;
pub mod widget;

pub use client::{SearchApi, WikipediaClient};
pub use data_models::SearchResult;
pub use error::SearchError;
pub use params::RequestParameters;
pub use view::{HtmlRegions, KeyEvent, SearchView};
pub use widget::{SearchWidget, SubmitOutcome};

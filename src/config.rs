use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_ARTICLE_BASE: &str = "https://en.wikipedia.org/";
pub const DEFAULT_EXCERPT_CHARS: u32 = 250;
pub const DEFAULT_RESULT_LIMIT: u32 = 20;
pub const DEFAULT_USER_AGENT: &str = concat!("wikisearch/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        search: SearchConfig {
            endpoint: get_env_or_default("WIKISEARCH_ENDPOINT", DEFAULT_ENDPOINT),
            article_base: get_env_or_default("WIKISEARCH_ARTICLE_BASE", DEFAULT_ARTICLE_BASE),
            excerpt_chars: get_env_parsed("WIKISEARCH_EXCHARS", DEFAULT_EXCERPT_CHARS),
            result_limit: get_env_parsed("WIKISEARCH_LIMIT", DEFAULT_RESULT_LIMIT),
            user_agent: get_env_or_default("WIKISEARCH_USER_AGENT", DEFAULT_USER_AGENT),
            timeout: env::var("WIKISEARCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs),
        },
        addr: get_env_or_default("WIKISEARCH_ADDR", DEFAULT_ADDR),
    }
});

pub struct Config {
    pub search: SearchConfig,
    pub addr: String,
}

/// Everything the widget and the HTTP client need to talk to the search API.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    /// Site root that `?curid=<id>` is appended to for article links.
    pub article_base: String,
    pub excerpt_chars: u32,
    pub result_limit: u32,
    pub user_agent: String,
    /// `None` leaves the transport's own behaviour in place.
    pub timeout: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            article_base: DEFAULT_ARTICLE_BASE.to_string(),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            result_limit: DEFAULT_RESULT_LIMIT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed(key: &str, default: u32) -> u32 {
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid {key}={value}, using {default}");
            default
        }),
        Err(_) => default,
    }
}

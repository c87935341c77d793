use crate::config::SearchConfig;

/// Query parameters for a `generator=search` + `prop=extracts` request.
///
/// The fixed part is built once; every search derives its own copy through
/// [`RequestParameters::with_term`], leaving the base untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    excerpt_chars: u32,
    result_limit: u32,
    term: Option<String>,
}

impl Default for RequestParameters {
    fn default() -> Self {
        RequestParameters::from_config(&SearchConfig::default())
    }
}

impl RequestParameters {
    pub fn from_config(config: &SearchConfig) -> RequestParameters {
        RequestParameters {
            excerpt_chars: config.excerpt_chars,
            result_limit: config.result_limit,
            term: None,
        }
    }

    pub fn with_term(&self, term: &str) -> RequestParameters {
        RequestParameters {
            term: Some(term.to_string()),
            ..self.clone()
        }
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn excerpt_chars(&self) -> u32 {
        self.excerpt_chars
    }

    pub fn result_limit(&self) -> u32 {
        self.result_limit
    }

    /// Name/value pairs in the order they go on the wire.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("format", "json".to_string()),
            ("action", "query".to_string()),
            ("prop", "extracts".to_string()),
            ("exchars", self.excerpt_chars.to_string()),
            ("exintro", "true".to_string()),
            ("explaintext", "true".to_string()),
            ("generator", "search".to_string()),
            ("gsrlimit", self.result_limit.to_string()),
        ];
        if let Some(term) = &self.term {
            pairs.push(("gsrsearch", term.clone()));
        }
        pairs
    }
}

#[test]
fn test_with_term_leaves_base_alone() {
    let base = RequestParameters::default();
    let turing = base.with_term("Turing");
    let lovelace = base.with_term("Lovelace");

    assert_eq!(base.term(), None);
    assert_eq!(turing.term(), Some("Turing"));
    assert_eq!(lovelace.term(), Some("Lovelace"));
    assert_eq!(turing.excerpt_chars(), base.excerpt_chars());
}

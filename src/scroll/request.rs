//! Request construction for the search and scroll endpoints

use crate::config::ExportSettings;
use serde_json::json;
use url::Url;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Delete,
}

/// HTTP request to be sent to the cluster
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// URL to request
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// JSON body, sent as-is
    pub body: Option<String>,
}

impl SearchRequest {
    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            body: None,
        }
    }

    /// Create a DELETE request
    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Delete,
            body: None,
        }
    }

    /// Set the body text verbatim
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a JSON body
    pub fn json(self, value: &serde_json::Value) -> Self {
        self.body(value.to_string())
    }
}

/// HTTP response from the cluster
#[derive(Debug)]
pub struct SearchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Requested URL
    pub url: String,
}

impl SearchResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What the initial search request asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryBody {
    /// Lexical query wrapped in a `query_string` query
    QueryString(String),
    /// Complete request body sent verbatim
    Raw(String),
}

/// Everything needed to build the requests of one scroll
#[derive(Debug, Clone)]
pub struct ScrollQuery {
    host: Url,
    index: Option<String>,
    body: QueryBody,
    page_size: u32,
    keep_alive: String,
}

impl ScrollQuery {
    pub fn new(host: Url, index: Option<String>, body: QueryBody) -> Self {
        Self {
            host,
            index: index.filter(|i| !i.is_empty()),
            body,
            page_size: crate::MAX_PAGE_SIZE,
            keep_alive: crate::SCROLL_KEEP_ALIVE.to_string(),
        }
    }

    /// Apply page size and keep-alive from settings
    pub fn with_settings(mut self, settings: &ExportSettings) -> Self {
        self.page_size = settings.page_size;
        self.keep_alive = settings.scroll_keep_alive.clone();
        self
    }

    /// Whether the initial request opens a scroll context.
    ///
    /// Only index-scoped searches do; without an index the export is a
    /// single page.
    pub fn is_scrolling(&self) -> bool {
        self.index.is_some()
    }

    /// Initial search request
    pub fn initial_request(&self) -> SearchRequest {
        let url = match self.index {
            Some(ref index) => {
                let mut url = self.endpoint(&[index.as_str(), "_search"]);
                url.query_pairs_mut().append_pair("scroll", &self.keep_alive);
                url
            }
            None => self.endpoint(&["_search"]),
        };

        let request = SearchRequest::post(url.as_str());
        match self.body {
            QueryBody::Raw(ref raw) => request.body(raw.clone()),
            QueryBody::QueryString(ref query) => request.json(&json!({
                "size": self.page_size,
                "query": {
                    "query_string": {
                        "query": query
                    }
                }
            })),
        }
    }

    /// Continuation request for the given cursor
    pub fn continuation_request(&self, cursor: &str) -> SearchRequest {
        let url = self.endpoint(&["_search", "scroll"]);
        SearchRequest::post(url.as_str()).json(&json!({
            "scroll": self.keep_alive,
            "scroll_id": cursor
        }))
    }

    /// Request releasing the scroll context behind the given cursor
    pub fn clear_request(&self, cursor: &str) -> SearchRequest {
        let url = self.endpoint(&["_search", "scroll"]);
        SearchRequest::delete(url.as_str()).json(&json!({
            "scroll_id": [cursor]
        }))
    }

    /// Host URL with the given path segments appended to its path
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.host.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

//! Page fetching against the search and scroll endpoints

use super::models::Page;
use super::request::{ScrollQuery, SearchRequest, SearchResponse};
use crate::error::{ExportError, Result};
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Source of result pages, driven by the exporter one page at a time
#[async_trait]
pub trait PageSource: Send {
    /// Fetch the page following `cursor`, or the first page when it is `None`.
    ///
    /// Returns `Ok(None)` once the server has no more hits to give.
    async fn fetch(&mut self, cursor: Option<&str>) -> Result<Option<Page>>;

    /// Release whatever server-side context the source still holds. Best effort.
    async fn close(&mut self) {}
}

/// Fetches pages over HTTP, one request per page with no retries
pub struct PageFetcher {
    client: HttpClient,
    query: ScrollQuery,
    /// Latest scroll id issued by the server, empty pages included
    scroll_id: Option<String>,
}

impl PageFetcher {
    pub fn new(client: HttpClient, query: ScrollQuery) -> Self {
        Self {
            client,
            query,
            scroll_id: None,
        }
    }

    /// Build the request for the page following `cursor`.
    ///
    /// Index and query only matter for the first page; continuations carry
    /// nothing but the cursor.
    pub fn request_for(&self, cursor: Option<&str>) -> SearchRequest {
        match cursor {
            Some(cursor) if !cursor.is_empty() => self.query.continuation_request(cursor),
            _ => self.query.initial_request(),
        }
    }

    /// Decode a response, mapping a page without hits to the exhaustion signal
    fn decode(&mut self, response: SearchResponse) -> Result<Option<Page>> {
        if !response.is_success() {
            warn!(
                "{} answered with HTTP {}, decoding body anyway",
                response.url, response.status
            );
        }

        let page = Page::from_json(&response.text).map_err(|source| ExportError::Decode {
            url: response.url.clone(),
            source,
        })?;

        if let Some(cursor) = page.cursor() {
            self.scroll_id = Some(cursor.to_string());
        }

        if page.is_empty() {
            debug!("no more pages to fetch");
            return Ok(None);
        }

        Ok(Some(page))
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch(&mut self, cursor: Option<&str>) -> Result<Option<Page>> {
        let request = self.request_for(cursor);
        let response = self.client.execute(request).await?;
        self.decode(response)
    }

    async fn close(&mut self) {
        let Some(cursor) = self.scroll_id.take() else {
            return;
        };

        let request = self.query.clear_request(&cursor);
        match self.client.execute(request).await {
            Ok(response) if response.is_success() => debug!("cleared scroll context"),
            Ok(response) => warn!("failed to clear scroll context: HTTP {}", response.status),
            Err(e) => warn!("failed to clear scroll context: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::QueryBody;
    use url::Url;

    fn response(status: u16, text: &str) -> SearchResponse {
        SearchResponse {
            status,
            text: text.to_string(),
            url: "http://localhost:9200/_search".to_string(),
        }
    }

    fn fetcher() -> PageFetcher {
        let query = ScrollQuery::new(
            Url::parse("http://localhost:9200").unwrap(),
            Some("logs".to_string()),
            QueryBody::QueryString("*".to_string()),
        );
        PageFetcher::new(HttpClient::new().unwrap(), query)
    }

    #[test]
    fn test_request_for_cursor() {
        let fetcher = fetcher();

        assert!(fetcher.request_for(None).url.ends_with("/logs/_search?scroll=2m"));
        assert!(fetcher.request_for(Some("")).url.ends_with("/logs/_search?scroll=2m"));
        assert!(fetcher.request_for(Some("tok")).url.ends_with("/_search/scroll"));
    }

    #[test]
    fn test_decode_page() {
        let page = fetcher().decode(response(
            200,
            r#"{"_scroll_id": "s1", "hits": {"total": 1, "hits": [{"_source": {"a": 1}}]}}"#,
        ))
        .unwrap()
        .unwrap();
        assert_eq!(page.cursor(), Some("s1"));
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_decode_empty_page_is_exhaustion() {
        let mut fetcher = fetcher();
        let page = fetcher
            .decode(response(
                200,
                r#"{"_scroll_id": "s1", "hits": {"total": 3, "hits": []}}"#,
            ))
            .unwrap();
        assert!(page.is_none());
        // The context opened by an empty page still needs releasing
        assert_eq!(fetcher.scroll_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_decode_keeps_latest_scroll_id() {
        let mut fetcher = fetcher();
        fetcher
            .decode(response(
                200,
                r#"{"_scroll_id": "s1", "hits": {"total": 2, "hits": [{"_source": {"a": 1}}]}}"#,
            ))
            .unwrap();
        fetcher
            .decode(response(200, r#"{"hits": {"total": 2, "hits": [{"_source": {"a": 2}}]}}"#))
            .unwrap();
        assert_eq!(fetcher.scroll_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_decode_error_status_with_json_body() {
        // Error bodies are valid JSON without hits, so they end the scan
        let page = fetcher().decode(response(
            404,
            r#"{"error": {"type": "index_not_found_exception"}, "status": 404}"#,
        ))
        .unwrap();
        assert!(page.is_none());
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = fetcher().decode(response(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert!(matches!(err, ExportError::Decode { .. }));
    }
}

//! HTTP client for making requests to the search cluster

use super::user_agent::{accept_json, content_type_json, user_agent};
use crate::config::OutgoingSettings;
use crate::error::{ExportError, Result as ExportResult};
use crate::scroll::{HttpMethod, SearchRequest, SearchResponse};
use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper configured from [`OutgoingSettings`]
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    default_timeout: Duration,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout)
            .ok()
            .filter(|t| !t.is_zero())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "request_timeout must be a positive number of seconds, got {}",
                    settings.request_timeout
                )
            })?;

        let mut builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .default_headers(extra_headers(settings)?)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            default_timeout: timeout,
            user_agent: user_agent(settings.useragent_suffix.as_deref()),
        })
    }

    /// Execute a search request with the default timeout
    pub async fn execute(&self, request: SearchRequest) -> ExportResult<SearchResponse> {
        self.execute_with_timeout(request, self.default_timeout).await
    }

    /// Execute a search request with a custom timeout.
    ///
    /// The timeout covers the whole round trip, including reading the body.
    async fn execute_with_timeout(
        &self,
        request: SearchRequest,
        timeout: Duration,
    ) -> ExportResult<SearchResponse> {
        let mut req_builder = match request.method {
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        req_builder = req_builder
            .timeout(timeout)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_json())
            .header("Content-Type", content_type_json());

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        debug!("{:?} {}", request.method, request.url);

        let response = req_builder
            .send()
            .await
            .map_err(|e| ExportError::from_request(&request.url, timeout, e))?;

        Self::parse_response(response, &request.url, timeout).await
    }

    /// Read the full body so the connection is released before returning
    async fn parse_response(
        response: Response,
        url: &str,
        timeout: Duration,
    ) -> ExportResult<SearchResponse> {
        let status = response.status().as_u16();

        let text = response
            .text()
            .await
            .map_err(|e| ExportError::from_request(url, timeout, e))?;

        Ok(SearchResponse {
            status,
            text,
            url: url.to_string(),
        })
    }

    /// Timeout applied to every request
    pub fn timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Header map built from the configured extra headers
fn extra_headers(settings: &OutgoingSettings) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (key, value) in &settings.extra_headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| anyhow::anyhow!("invalid header name {}: {}", key, e))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| anyhow::anyhow!("invalid value for header {}: {}", key, e))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

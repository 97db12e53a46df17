//! Validated export parameters

use super::header::FieldFilter;
use crate::config::ExportSettings;
use crate::error::{ExportError, Result};
use crate::scroll::{QueryBody, ScrollQuery};
use url::Url;

/// Parameters of one export run, validated before any network activity
#[derive(Debug, Clone)]
pub struct ExportParams {
    pub host: Url,
    pub index: Option<String>,
    pub body: QueryBody,
    pub fields: FieldFilter,
}

impl ExportParams {
    /// Validate raw CLI values.
    ///
    /// Exactly one of `query` and `raw_query` must be non-empty. A raw query
    /// must parse as JSON but is sent unmodified.
    pub fn new(
        host: &str,
        index: Option<&str>,
        query: Option<&str>,
        raw_query: Option<&str>,
        fields: &str,
    ) -> Result<Self> {
        let host = parse_host(host)?;

        let index = index
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(str::to_string);

        let query = query.filter(|q| !q.trim().is_empty());
        let raw_query = raw_query.filter(|q| !q.trim().is_empty());
        let body = match (query, raw_query) {
            (Some(_), Some(_)) => {
                return Err(ExportError::validation(
                    "only one of query and raw-query may be set",
                ))
            }
            (None, None) => return Err(ExportError::validation("raw-query or query must be set")),
            (Some(q), None) => QueryBody::QueryString(q.to_string()),
            (None, Some(raw)) => {
                serde_json::from_str::<serde_json::Value>(raw).map_err(|e| {
                    ExportError::validation(format!("raw-query is not valid JSON: {}", e))
                })?;
                QueryBody::Raw(raw.to_string())
            }
        };

        let fields = FieldFilter::parse(fields);
        if fields.is_empty() {
            return Err(ExportError::validation("fields must be set"));
        }

        Ok(Self {
            host,
            index,
            body,
            fields,
        })
    }

    /// Scroll requests for these parameters
    pub fn scroll_query(&self, settings: &ExportSettings) -> ScrollQuery {
        ScrollQuery::new(self.host.clone(), self.index.clone(), self.body.clone())
            .with_settings(settings)
    }
}

fn parse_host(host: &str) -> Result<Url> {
    let host = host.trim();
    if host.is_empty() {
        return Err(ExportError::validation("host must be set"));
    }

    let url = Url::parse(host)
        .map_err(|e| ExportError::validation(format!("failed to parse host {}: {}", host, e)))?;

    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(ExportError::validation(format!(
            "host must be an http(s) URL, got {}",
            host
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_query_params() {
        let params = ExportParams::new(
            "http://localhost:9200",
            Some(" logs "),
            Some("level:error"),
            None,
            "a,b",
        )
        .unwrap();

        assert_eq!(params.host.as_str(), "http://localhost:9200/");
        assert_eq!(params.index.as_deref(), Some("logs"));
        assert_eq!(params.body, QueryBody::QueryString("level:error".to_string()));
        assert_eq!(params.fields.fields(), &["a", "b"]);
    }

    #[test]
    fn test_raw_query_kept_verbatim() {
        let raw = r#"{ "query": { "match_all": {} } }"#;
        let params = ExportParams::new("https://es:9200", None, Some(""), Some(raw), "a").unwrap();
        assert_eq!(params.body, QueryBody::Raw(raw.to_string()));
        assert!(params.index.is_none());
    }

    #[test]
    fn test_rejections() {
        let cases = [
            ("", Some("q"), None, "a"),
            ("not a url", Some("q"), None, "a"),
            ("ftp://host", Some("q"), None, "a"),
            ("http://localhost:9200", None, None, "a"),
            ("http://localhost:9200", Some("q"), Some("{}"), "a"),
            ("http://localhost:9200", None, Some("{not json"), "a"),
            ("http://localhost:9200", Some("q"), None, ""),
            ("http://localhost:9200", Some("q"), None, " , "),
        ];

        for (host, query, raw, fields) in cases {
            let err = ExportParams::new(host, None, query, raw, fields).unwrap_err();
            assert!(
                matches!(err, ExportError::Validation(_)),
                "expected validation error for {:?}",
                (host, query, raw, fields)
            );
        }
    }
}

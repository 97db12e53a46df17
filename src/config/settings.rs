//! Settings structures for es-export configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Main settings structure matching es-export's settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub outgoing: OutgoingSettings,
    pub export: ExportSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (ES_EXPORT_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("ES_EXPORT_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
        if let Ok(val) = std::env::var("ES_EXPORT_VERIFY_SSL") {
            self.outgoing.verify_ssl = val.parse().unwrap_or(true);
        }
        if let Ok(val) = std::env::var("ES_EXPORT_PROXY") {
            self.outgoing.proxies.all = Some(val);
        }
        if let Ok(val) = std::env::var("ES_EXPORT_PAGE_SIZE") {
            if let Ok(size) = val.parse() {
                self.export.page_size = size;
            }
        }
        if let Ok(val) = std::env::var("ES_EXPORT_SCROLL_KEEP_ALIVE") {
            self.export.scroll_keep_alive = val;
        }
        if let Ok(val) = std::env::var("ES_EXPORT_CLEAR_SCROLL") {
            self.export.clear_scroll = val.parse().unwrap_or(true);
        }
        if let Ok(val) = std::env::var("ES_EXPORT_QUOTE_CELLS") {
            self.export.quote_cells = val.parse().unwrap_or(false);
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds, from dispatch to end of body
    pub request_timeout: f64,
    /// User agent suffix appended after the crate name
    pub useragent_suffix: Option<String>,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            useragent_suffix: None,
            pool_maxsize: 4,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Scroll and CSV output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Hits requested per page by the synthesized query body
    pub page_size: u32,
    /// Scroll context lifetime requested on every page
    pub scroll_keep_alive: String,
    /// Release the scroll context once the run finishes
    pub clear_scroll: bool,
    /// Quote cells containing separators (RFC 4180)
    pub quote_cells: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            page_size: crate::MAX_PAGE_SIZE,
            scroll_keep_alive: crate::SCROLL_KEEP_ALIVE.to_string(),
            clear_scroll: true,
            quote_cells: false,
        }
    }
}

impl ExportSettings {
    /// Reject values the cluster would accept but the export cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        if self.scroll_keep_alive.trim().is_empty() {
            anyhow::bail!("scroll_keep_alive must not be empty, e.g. \"2m\"");
        }
        Ok(())
    }
}

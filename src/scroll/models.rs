//! Decoded search responses

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// One matched document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Hit {
    /// Document fields in the order the server sent them
    #[serde(rename = "_source", default)]
    pub fields: Map<String, Value>,
}

impl Hit {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Get a field value by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// How the reported total relates to the real number of matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalRelation {
    #[default]
    Eq,
    Gte,
}

/// Total hit count as reported by the server.
///
/// Newer clusters report `{"value": n, "relation": "eq"}`, older ones a bare
/// integer. Both shapes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TotalHits {
    Count(u64),
    Tracked {
        value: u64,
        #[serde(default)]
        relation: TotalRelation,
    },
}

impl TotalHits {
    pub fn value(&self) -> u64 {
        match *self {
            Self::Count(value) | Self::Tracked { value, .. } => value,
        }
    }

    /// Whether the value is only a lower bound
    pub fn is_lower_bound(&self) -> bool {
        matches!(
            self,
            Self::Tracked {
                relation: TotalRelation::Gte,
                ..
            }
        )
    }
}

impl fmt::Display for TotalHits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_lower_bound() {
            write!(f, "{}+", self.value())
        } else {
            write!(f, "{}", self.value())
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawPage {
    #[serde(rename = "_scroll_id", default)]
    scroll_id: Option<String>,
    #[serde(default)]
    hits: RawHits,
}

#[derive(Debug, Default, Deserialize)]
struct RawHits {
    #[serde(default)]
    total: Option<TotalHits>,
    #[serde(default)]
    hits: Vec<Hit>,
}

/// One page of results from a search or scroll request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    cursor: Option<String>,
    total: Option<TotalHits>,
    hits: Vec<Hit>,
}

impl Page {
    pub fn new(cursor: Option<String>, total: Option<TotalHits>, hits: Vec<Hit>) -> Self {
        Self {
            cursor: cursor.filter(|c| !c.is_empty()),
            total,
            hits,
        }
    }

    /// Decode a response body
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let raw: RawPage = serde_json::from_str(text)?;
        Ok(Self::new(raw.scroll_id, raw.hits.total, raw.hits.hits))
    }

    /// Scroll cursor for the next page, if the server issued one
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn total(&self) -> Option<TotalHits> {
        self.total
    }

    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

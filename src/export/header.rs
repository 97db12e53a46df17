//! Column header derivation and row projection

use super::value::stringify;
use crate::scroll::Hit;

/// Requested columns, parsed from a comma-separated list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFilter {
    fields: Vec<String>,
}

impl FieldFilter {
    /// Parse `a,b,c`. Names are trimmed, blanks and repeats dropped.
    pub fn parse(list: &str) -> Self {
        let mut fields: Vec<String> = Vec::new();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if !fields.iter().any(|f| f == name) {
                fields.push(name.to_string());
            }
        }
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// An empty filter selects every field
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fixed column order of an export.
///
/// Derived once from the first hit and never updated, so later hits with
/// other field sets are projected onto the same columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    /// Derive the header from the first hit.
    ///
    /// With a filter, columns follow the filter's order and keep only names
    /// present in the hit. Without one, every key of the hit in document
    /// order.
    pub fn derive(hit: &Hit, filter: &FieldFilter) -> Self {
        let columns = if filter.is_empty() {
            hit.fields.keys().cloned().collect()
        } else {
            filter
                .fields()
                .iter()
                .filter(|f| hit.fields.contains_key(f.as_str()))
                .cloned()
                .collect()
        };

        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Project a hit onto this header; absent fields become empty cells
    pub fn project(&self, hit: &Hit) -> Row {
        let cells = self
            .columns
            .iter()
            .map(|column| hit.get(column).map(stringify).unwrap_or_default())
            .collect();

        Row { cells }
    }
}

/// One hit projected onto a [`Header`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn hit(value: Value) -> Hit {
        match value {
            Value::Object(map) => Hit::new(map),
            _ => panic!("hit source must be an object"),
        }
    }

    #[test]
    fn test_parse_filter() {
        let filter = FieldFilter::parse(" a, b,,a ,c ");
        assert_eq!(filter.fields(), &["a", "b", "c"]);
        assert!(FieldFilter::parse(" , ").is_empty());
    }

    #[test]
    fn test_header_follows_filter_order() {
        let first = hit(json!({"a": 1, "b": 2, "c": 3}));

        let header = Header::derive(&first, &FieldFilter::parse("a,b"));
        assert_eq!(header.columns(), &["a", "b"]);

        let header = Header::derive(&first, &FieldFilter::parse("b,a"));
        assert_eq!(header.columns(), &["b", "a"]);
    }

    #[test]
    fn test_header_skips_fields_missing_from_first_hit() {
        let first = hit(json!({"a": 1, "c": 3}));
        let header = Header::derive(&first, &FieldFilter::parse("a,b,c"));
        assert_eq!(header.columns(), &["a", "c"]);
    }

    #[test]
    fn test_header_without_filter_uses_document_order() {
        let first = hit(json!({"z": 1, "a": 2, "m": 3}));
        let header = Header::derive(&first, &FieldFilter::default());
        assert_eq!(header.columns(), &["z", "a", "m"]);
    }

    #[test]
    fn test_project_missing_field_is_empty() {
        let header = Header::derive(&hit(json!({"a": 1, "b": 2})), &FieldFilter::parse("a,b"));
        let row = header.project(&hit(json!({"a": "x", "c": "ignored"})));

        assert_eq!(row.cells(), &["x", ""]);
        assert_eq!(row.cells().len(), header.len());
    }

    #[test]
    fn test_project_keeps_header_order() {
        let header = Header::derive(&hit(json!({"a": 1, "b": 2})), &FieldFilter::parse("b,a"));
        let row = header.project(&hit(json!({"a": 1, "b": [1, 2], "extra": true})));
        assert_eq!(row.cells(), &["[1,2]", "1"]);
    }
}

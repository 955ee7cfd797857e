//! Raw catalog document shapes and shape classification.
//!
//! Three shapes are recognized:
//! - a bare array of `{name, category, price}` records;
//! - an object `{catalog: [...], featured?: [...], lastUpdate?: ...}`;
//! - the legacy sheet export `{table: {rows: [{c: [{v: ...}, ...]}]}}`.
//!
//! Spanish field names from the POS export (`vino`, `bodega`, `precio`,
//! `catalogo`, `destacados`) are accepted as aliases.

use super::error::CatalogError;
use serde::Deserialize;
use serde_json::Value;

/// A flat record as it appears in the JSON document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default, alias = "vino")]
    pub name: Value,

    #[serde(default, alias = "bodega")]
    pub category: Value,

    #[serde(default, alias = "precio")]
    pub price: Value,
}

impl RawRecord {
    /// Entries that are not objects yield `None` and are skipped.
    pub fn from_value(value: Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }

    /// Builds a record from a legacy sheet row: cells 0/1/2 are name, category, price.
    pub fn from_sheet_row(row: &Value) -> Option<Self> {
        let cells = row.get("c")?.as_array()?;
        let cell = |idx: usize| {
            cells
                .get(idx)
                .and_then(|cell| cell.get("v"))
                .cloned()
                .unwrap_or(Value::Null)
        };
        Some(Self {
            name: cell(0),
            category: cell(1),
            price: cell(2),
        })
    }

    pub fn name_text(&self) -> Option<String> {
        value_text(&self.name)
    }

    pub fn category_text(&self) -> Option<String> {
        value_text(&self.category)
    }
}

/// Object form of the catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(alias = "catalogo")]
    pub catalog: Vec<Value>,

    #[serde(default, alias = "destacados")]
    pub featured: Option<Vec<Value>>,

    #[serde(default, rename = "lastUpdate")]
    pub last_update: Option<Value>,
}

/// Legacy spreadsheet export.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSheet {
    pub table: RawTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTable {
    #[serde(default)]
    pub rows: Vec<Value>,
}

/// Classified payload, ready for normalization.
#[derive(Debug, Clone)]
pub enum SourceShape {
    Records(Vec<Value>),
    Document(RawDocument),
    LegacySheet(RawSheet),
}

impl SourceShape {
    /// Parses document text and classifies it.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let body = strip_jsonp(text);
        let value: Value = serde_json::from_str(body).map_err(|e| {
            CatalogError::unavailable(format!("No se pudo leer el catálogo ({e})"))
        })?;
        Self::classify(value)
    }

    /// Decides which shape a JSON value has. The object form wins over the
    /// legacy sheet when both keys are present.
    pub fn classify(value: Value) -> Result<Self, CatalogError> {
        if let Value::Array(records) = value {
            return Ok(Self::Records(records));
        }

        let is_document = value.get("catalog").is_some() || value.get("catalogo").is_some();
        let is_sheet = value.get("table").is_some();

        if is_document {
            serde_json::from_value::<RawDocument>(value)
                .map(Self::Document)
                .map_err(|e| CatalogError::malformed(format!("Catálogo inválido: {e}")))
        } else if is_sheet {
            serde_json::from_value::<RawSheet>(value)
                .map(Self::LegacySheet)
                .map_err(|e| CatalogError::malformed(format!("Planilla inválida: {e}")))
        } else {
            Err(CatalogError::malformed("Formato de catálogo no reconocido"))
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Records(_) => "records",
            Self::Document(_) => "document",
            Self::LegacySheet(_) => "legacy_sheet",
        }
    }
}

/// The sheet endpoint answers with `google.visualization.Query.setResponse({...});`.
/// Returns the JSON between the outermost parentheses for such bodies.
fn strip_jsonp(text: &str) -> &str {
    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }
    match (trimmed.find('('), trimmed.rfind(')')) {
        (Some(start), Some(end)) if start < end => trimmed[start + 1..end].trim(),
        _ => trimmed,
    }
}

/// Textual value of a scalar: strings as-is, numbers in their JSON form.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_bare_array() {
        let shape = SourceShape::classify(json!([{"name": "Malbec"}])).unwrap();
        assert_eq!(shape.kind(), "records");
    }

    #[test]
    fn test_classify_document_with_spanish_keys() {
        let shape = SourceShape::classify(json!({
            "catalogo": [{"vino": "Malbec", "bodega": "Catena", "precio": 5000}],
            "destacados": []
        }))
        .unwrap();
        match shape {
            SourceShape::Document(doc) => {
                assert_eq!(doc.catalog.len(), 1);
                assert_eq!(doc.featured.map(|f| f.len()), Some(0));
            }
            other => panic!("unexpected shape: {}", other.kind()),
        }
    }

    #[test]
    fn test_classify_rejects_unknown_object() {
        let err = SourceShape::classify(json!({"products": []})).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedSource(_)));
    }

    #[test]
    fn test_classify_rejects_catalog_of_wrong_type() {
        let err = SourceShape::classify(json!({"catalog": "nope"})).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedSource(_)));
    }

    #[test]
    fn test_classify_rejects_scalars() {
        assert!(SourceShape::classify(json!(42)).is_err());
        assert!(SourceShape::classify(json!(null)).is_err());
    }

    #[test]
    fn test_parse_invalid_json_is_unavailable() {
        let err = SourceShape::parse("<html>404</html>").unwrap_err();
        assert!(matches!(err, CatalogError::SourceUnavailable(_)));
    }

    #[test]
    fn test_parse_strips_jsonp_wrapper() {
        let text = r#"/*O_o*/
google.visualization.Query.setResponse({"table":{"rows":[]}});"#;
        let shape = SourceShape::parse(text).unwrap();
        assert_eq!(shape.kind(), "legacy_sheet");
    }

    #[test]
    fn test_sheet_row_cells() {
        let row = json!({"c": [{"v": "Malbec"}, null, {"v": 1500}]});
        let record = RawRecord::from_sheet_row(&row).unwrap();
        assert_eq!(record.name_text(), Some("Malbec".to_string()));
        assert_eq!(record.category_text(), None);
        assert_eq!(record.price, json!(1500));
    }

    #[test]
    fn test_non_object_record_is_skipped() {
        assert!(RawRecord::from_value(json!("Malbec")).is_none());
        assert!(RawRecord::from_value(json!({"vino": "Malbec"})).is_some());
    }
}

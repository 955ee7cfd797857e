use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category for records without a bodega.
pub const DEFAULT_CATEGORY: &str = "Other";

// ============================================================================
// Catalog item
// ============================================================================

/// A normalized catalog entry (a vino). Immutable once built by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,

    #[serde(rename = "categoryName")]
    pub category_name: String,

    #[serde(rename = "displayPrice")]
    pub display_price: String,
}

impl CatalogItem {
    pub fn new(
        name: impl Into<String>,
        category_name: impl Into<String>,
        display_price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category_name: category_name.into(),
            display_price: display_price.into(),
        }
    }
}

// ============================================================================
// Featured item (destacados)
// ============================================================================

/// Highlighted item shown above the main listing. The price is kept raw and
/// formatted at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedItem {
    pub name: String,

    #[serde(rename = "categoryName")]
    pub category_name: String,

    #[serde(rename = "rawPrice", default)]
    pub raw_price: Value,
}

/// Trims the name and returns `None` when nothing is left.
pub(crate) fn normalize_name(raw: Option<&str>) -> Option<String> {
    let name = raw?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Falls back to `default` for absent, empty or whitespace-only categories.
pub(crate) fn normalize_category(raw: Option<&str>, default: &str) -> String {
    match raw {
        Some(category) if !category.trim().is_empty() => category.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name(Some("  Malbec  ")), Some("Malbec".to_string()));
        assert_eq!(normalize_name(Some("   ")), None);
        assert_eq!(normalize_name(None), None);
    }

    #[test]
    fn test_normalize_category_keeps_literal_value() {
        assert_eq!(normalize_category(Some("Bodega Ñandú"), DEFAULT_CATEGORY), "Bodega Ñandú");
        assert_eq!(normalize_category(Some(""), DEFAULT_CATEGORY), "Other");
        assert_eq!(normalize_category(None, DEFAULT_CATEGORY), "Other");
    }
}

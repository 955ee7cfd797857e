use super::aggregate::{
    normalize_category, normalize_name, CatalogItem, FeaturedItem, DEFAULT_CATEGORY,
};
use super::error::CatalogError;
use super::index::{group_by_category, CatalogIndex};
use super::source::{RawDocument, RawRecord, RawSheet, SourceShape};
use crate::shared::config::CatalogConfig;
use crate::shared::format::PriceFormatter;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Result of one load cycle. Swapped into the application state as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub index: CatalogIndex,
    pub featured: Vec<FeaturedItem>,
    pub last_update: DateTime<Utc>,
}

/// Parses catalog documents and normalizes their records.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    formatter: PriceFormatter,
    default_category: String,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self {
            formatter: PriceFormatter::default(),
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl CatalogLoader {
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            formatter: PriceFormatter::new(
                config.display.currency_symbol.clone(),
                config.display.price_on_request.clone(),
            ),
            default_category: config.display.default_category.clone(),
        }
    }

    pub fn formatter(&self) -> &PriceFormatter {
        &self.formatter
    }

    /// Parses `text` and builds a fresh catalog. `now` stands in for a
    /// missing or unreadable `lastUpdate`.
    pub fn load(&self, text: &str, now: DateTime<Utc>) -> Result<LoadedCatalog, CatalogError> {
        let shape = SourceShape::parse(text)?;
        log::debug!("📄 Catalog document shape: {}", shape.kind());

        let loaded = match shape {
            SourceShape::Records(records) => LoadedCatalog {
                index: group_by_category(
                    self.normalize_records(records.into_iter().filter_map(RawRecord::from_value)),
                ),
                featured: Vec::new(),
                last_update: now,
            },
            SourceShape::Document(document) => self.load_document(document, now),
            SourceShape::LegacySheet(sheet) => self.load_sheet(sheet, now),
        };

        log::info!(
            "📥 Catálogo cargado: {} bodegas, {} vinos, {} destacados",
            loaded.index.len(),
            loaded.index.item_count(),
            loaded.featured.len()
        );
        Ok(loaded)
    }

    fn load_document(&self, document: RawDocument, now: DateTime<Utc>) -> LoadedCatalog {
        let RawDocument {
            catalog,
            featured,
            last_update,
        } = document;

        let last_update = match last_update {
            None | Some(Value::Null) => now,
            Some(raw) => parse_timestamp(&raw).unwrap_or_else(|| {
                log::warn!("⚠️ lastUpdate ilegible ({}), usando la hora de carga", raw);
                now
            }),
        };

        LoadedCatalog {
            index: group_by_category(
                self.normalize_records(catalog.into_iter().filter_map(RawRecord::from_value)),
            ),
            featured: self.normalize_featured(
                featured
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(RawRecord::from_value),
            ),
            last_update,
        }
    }

    fn load_sheet(&self, sheet: RawSheet, now: DateTime<Utc>) -> LoadedCatalog {
        // First row is the header
        let records = sheet
            .table
            .rows
            .iter()
            .skip(1)
            .filter_map(RawRecord::from_sheet_row);

        LoadedCatalog {
            index: group_by_category(self.normalize_records(records)),
            featured: Vec::new(),
            last_update: now,
        }
    }

    /// Drops records without a usable name; keeps input order.
    pub fn normalize_records(
        &self,
        records: impl IntoIterator<Item = RawRecord>,
    ) -> Vec<CatalogItem> {
        let mut skipped = 0usize;
        let items: Vec<CatalogItem> = records
            .into_iter()
            .filter_map(|record| {
                let Some(name) = normalize_name(record.name_text().as_deref()) else {
                    skipped += 1;
                    return None;
                };
                Some(CatalogItem {
                    name,
                    category_name: normalize_category(
                        record.category_text().as_deref(),
                        &self.default_category,
                    ),
                    display_price: self.formatter.format(&record.price),
                })
            })
            .collect();

        if skipped > 0 {
            log::debug!("Registros sin nombre omitidos: {}", skipped);
        }
        items
    }

    fn normalize_featured(&self, records: impl IntoIterator<Item = RawRecord>) -> Vec<FeaturedItem> {
        records
            .into_iter()
            .filter_map(|record| {
                let name = normalize_name(record.name_text().as_deref())?;
                Some(FeaturedItem {
                    name,
                    category_name: normalize_category(
                        record.category_text().as_deref(),
                        &self.default_category,
                    ),
                    raw_price: record.price,
                })
            })
            .collect()
    }
}

/// Loads a document with the default formatter and category sentinel.
pub fn load(text: &str, now: DateTime<Utc>) -> Result<LoadedCatalog, CatalogError> {
    CatalogLoader::default().load(text, now)
}

/// Reads `lastUpdate`: epoch milliseconds, RFC 3339, or a naive ISO-like
/// date/time taken as UTC.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            Utc.timestamp_millis_opt(millis).single()
        }
        Value::String(s) => parse_timestamp_str(s.trim()),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        let millis: i64 = s.parse().ok()?;
        return Utc.timestamp_millis_opt(millis).single();
    }
    None
}

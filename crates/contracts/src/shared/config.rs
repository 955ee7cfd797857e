use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub source: SourceConfig,
    pub display: DisplayConfig,
    pub navigation: NavigationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SourceConfig {
    /// Location of the catalog document, relative to the page.
    pub data_url: String,
    /// Appends `?t=<epoch ms>` so stale copies are bypassed.
    pub cache_bust: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub price_on_request: String,
    pub default_category: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Query parameter that deep-links to a category (`?bodega=...`).
    pub deep_link_param: String,
    pub search_debounce_ms: u32,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[source]
data_url = "data/productos.json"
cache_bust = true

[display]
currency_symbol = "$"
price_on_request = "Consultar"
default_category = "Other"

[navigation]
deep_link_param = "bodega"
search_debounce_ms = 150
"#;

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig {
                data_url: "data/productos.json".to_string(),
                cache_bust: true,
            },
            display: DisplayConfig {
                currency_symbol: "$".to_string(),
                price_on_request: "Consultar".to_string(),
                default_category: "Other".to_string(),
            },
            navigation: NavigationConfig {
                deep_link_param: "bodega".to_string(),
                search_debounce_ms: 150,
            },
        }
    }
}

/// Load configuration, layering an optional TOML override on top of the
/// embedded defaults. Override tables are merged key by key, so a file may
/// set just `[source] data_url = "..."`.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<CatalogConfig> {
    let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;

    if let Some(text) = overrides {
        let overrides: toml::Table = toml::from_str(text)?;
        merge_tables(&mut merged, overrides);
        log::info!("⚙️ Catalog config overrides applied");
    } else {
        log::info!("⚙️ Using default embedded configuration");
    }

    let config: CatalogConfig = toml::Value::Table(merged).try_into()?;
    Ok(config)
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}

impl SourceConfig {
    /// Document URL for a fetch issued at `now_ms`.
    pub fn request_url(&self, now_ms: i64) -> String {
        if !self.cache_bust {
            return self.data_url.clone();
        }
        let separator = if self.data_url.contains('?') { '&' } else { '?' };
        format!("{}{}t={}", self.data_url, separator, now_ms)
    }
}

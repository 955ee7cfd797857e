//! Fetching the catalog document.

use contracts::domain::a001_catalog::CatalogError;
use gloo_net::http::Request;

/// GETs the catalog document and returns its body text.
///
/// Transport failures and non-success statuses both map to
/// `SourceUnavailable`; parsing is left to the loader.
pub async fn fetch_catalog(url: &str) -> Result<String, CatalogError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| CatalogError::unavailable(format!("{e}")))?;

    if !response.ok() {
        log::warn!("⚠️ No se encontró {} (HTTP {})", url, response.status());
        return Err(CatalogError::unavailable(format!(
            "No se encontró el catálogo de productos (HTTP {})",
            response.status()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| CatalogError::unavailable(format!("{e}")))
}

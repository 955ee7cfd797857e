//! Browser implementation of the router's address bar.

use contracts::usecases::u001_browse_catalog::AddressBar;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Reads `location` and writes through the History API, so fragment
/// updates never fire `hashchange`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAddressBar;

impl BrowserAddressBar {
    fn target_url(fragment: &str, keep_query: bool) -> Option<String> {
        let location = window()?.location();
        let path = location.pathname().ok()?;
        let query = if keep_query {
            location.search().unwrap_or_default()
        } else {
            String::new()
        };

        if fragment.is_empty() {
            Some(format!("{}{}", path, query))
        } else {
            Some(format!("{}{}#{}", path, query, fragment))
        }
    }

    fn write(fragment: &str, push: bool) {
        let Some(url) = Self::target_url(fragment, push) else {
            return;
        };
        let Some(history) = window().and_then(|w| w.history().ok()) else {
            return;
        };

        let result = if push {
            history.push_state_with_url(&JsValue::NULL, "", Some(&url))
        } else {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
        };
        if let Err(e) = result {
            log::warn!("⚠️ No se pudo actualizar la URL {}: {:?}", url, e);
        }
    }
}

impl AddressBar for BrowserAddressBar {
    fn fragment(&self) -> String {
        window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| hash.trim_start_matches('#').to_string())
            .unwrap_or_default()
    }

    fn query(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .map(|search| search.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    fn push_fragment(&mut self, fragment: &str) {
        Self::write(fragment, true);
    }

    fn replace_fragment(&mut self, fragment: &str) {
        Self::write(fragment, false);
    }
}

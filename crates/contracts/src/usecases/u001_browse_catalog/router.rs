//! Hash-based navigation between the home listing and a bodega page.
//!
//! Fragment protocol: `#detail-<percent-encoded category>`; no recognized
//! fragment means home. Older links used `#bodega-<...>` and are still read.

use super::state::ApplicationState;
use url::form_urlencoded;

pub const DETAIL_PREFIX: &str = "detail-";
const LEGACY_DETAIL_PREFIX: &str = "bodega-";

/// The browser address bar, abstracted so routing runs without a window.
pub trait AddressBar {
    /// Current fragment without the leading `#`, as found in the URL.
    fn fragment(&self) -> String;

    /// Current query string without the leading `?`.
    fn query(&self) -> String;

    /// Adds a history entry with the given fragment (empty removes it).
    fn push_fragment(&mut self, fragment: &str);

    /// Rewrites the current history entry with the given fragment and no
    /// query string.
    fn replace_fragment(&mut self, fragment: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationToken {
    Home,
    Detail(String),
}

impl NavigationToken {
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let encoded = fragment
            .strip_prefix(DETAIL_PREFIX)
            .or_else(|| fragment.strip_prefix(LEGACY_DETAIL_PREFIX));

        match encoded.map(urlencoding::decode) {
            Some(Ok(category)) if !category.is_empty() => Self::Detail(category.into_owned()),
            _ => Self::Home,
        }
    }

    pub fn to_fragment(&self) -> String {
        match self {
            Self::Home => String::new(),
            Self::Detail(category) => {
                format!("{}{}", DETAIL_PREFIX, urlencoding::encode(category))
            }
        }
    }
}

fn is_detail_fragment(fragment: &str) -> bool {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment.starts_with(DETAIL_PREFIX) || fragment.starts_with(LEGACY_DETAIL_PREFIX)
}

/// Which page is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Detail(String),
}

/// Two-state router. Navigation requests that cannot be honored yet are
/// dropped; the coordinator re-checks the address once after loading.
#[derive(Debug, Default)]
pub struct ViewRouter {
    current: View,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &View {
        &self.current
    }

    /// Always succeeds. Removes a detail fragment from the address, if any.
    pub fn navigate_home(&mut self, address: &mut impl AddressBar) -> View {
        log::debug!("🏠 navigate_home");
        if is_detail_fragment(&address.fragment()) {
            address.push_fragment("");
        }
        self.current = View::Home;
        View::Home
    }

    /// Enters `Detail(category)` and records it in the address. Returns
    /// `None` and leaves the current view untouched when data is not ready
    /// or the category is unknown.
    pub fn navigate_to_detail(
        &mut self,
        category: &str,
        state: &ApplicationState,
        address: &mut impl AddressBar,
    ) -> Option<View> {
        if !state.category_exists(category) {
            log::debug!(
                "⏳ navigate_to_detail('{}') ignored (ready: {})",
                category,
                state.is_data_ready()
            );
            return None;
        }

        let token = NavigationToken::Detail(category.to_string());
        address.push_fragment(&token.to_fragment());
        self.current = View::Detail(category.to_string());
        Some(self.current.clone())
    }

    /// Re-derives the view from the address. Returns `None` while data is
    /// not loaded yet.
    pub fn on_address_changed(
        &mut self,
        state: &ApplicationState,
        address: &mut impl AddressBar,
    ) -> Option<View> {
        let fragment = address.fragment();
        if !state.is_data_ready() {
            log::debug!("⏳ Esperando a que se carguen los datos (#{})", fragment);
            return None;
        }

        self.current = match NavigationToken::from_fragment(&fragment) {
            NavigationToken::Detail(category) if state.category_exists(&category) => {
                View::Detail(category)
            }
            token => {
                if let NavigationToken::Detail(category) = token {
                    log::info!("Bodega no encontrada: {}", category);
                }
                if is_detail_fragment(&fragment) {
                    address.replace_fragment("");
                }
                View::Home
            }
        };
        Some(self.current.clone())
    }

    /// One-time startup rewrite of `?<param>=<category>` into the fragment
    /// form. Does not change the view; the post-load address check does.
    pub fn apply_deep_link(&self, param: &str, address: &mut impl AddressBar) -> bool {
        let query = address.query();
        let value = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == param)
            .map(|(_, value)| value.into_owned());

        match value.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => {
                log::info!("🔗 Deep link a bodega: {}", category);
                let token = NavigationToken::Detail(category.to_string());
                address.replace_fragment(&token.to_fragment());
                true
            }
            _ => false,
        }
    }
}

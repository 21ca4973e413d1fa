//! Brand filter on the dictionary pages.
//!
//! Picking a brand in `#brandFilter` jumps straight to the car-model list
//! filtered by that brand. An empty choice ("all brands") stays put.

use crate::config::AdminUiConfig;
use crate::host::{Dom, Navigator};
use log::{debug, info};
use url::form_urlencoded;

/// Filtered listing URL for `value`, e.g. `/admin/dict/models?brand_id=42`.
///
/// The value is form-urlencoded so `&` or `#` cannot smuggle in extra
/// parameters or a fragment.
pub fn models_url(path: &str, param: &str, value: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
    format!("{}?{}={}", path, param, encoded)
}

/// Attach the change listener to the brand filter, if the page has one.
///
/// Returns whether a listener was registered.
pub fn init<D, N>(dom: &D, navigator: N, config: &AdminUiConfig) -> bool
where
    D: Dom,
    N: Navigator + 'static,
{
    let Some(select) = dom.element_by_id(&config.brand_filter_id) else {
        debug!("no #{} on this page", config.brand_filter_id);
        return false;
    };

    let path = config.models_path.clone();
    let param = config.brand_query_param.clone();
    dom.on_change(
        &select,
        Box::new(move |brand_id: String| {
            if brand_id.is_empty() {
                return;
            }
            navigator.navigate(&models_url(&path, &param, &brand_id));
        }),
    );
    info!("brand filter wired to {}", config.models_path);
    true
}

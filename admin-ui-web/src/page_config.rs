//! Per-page overrides of [`AdminUiConfig`].
//!
//! A template may embed
//! `<script type="application/json" id="admin-ui-config">{"stats_days": 7}</script>`;
//! fields it leaves out keep their defaults.

use crate::js_bridge::WebDom;
use admin_ui_core::AdminUiConfig;
use log::warn;

/// Id of the optional JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "admin-ui-config";

/// Read the page's config element, falling back to defaults.
pub fn load(dom: &WebDom) -> AdminUiConfig {
    parse(dom.text_of(CONFIG_ELEMENT_ID).as_deref())
}

pub(crate) fn parse(text: Option<&str>) -> AdminUiConfig {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return AdminUiConfig::default();
    };
    match AdminUiConfig::from_json(text) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            AdminUiConfig::default()
        }
    }
}

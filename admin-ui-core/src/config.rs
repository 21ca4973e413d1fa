//! Page contract settings: element ids, paths, timings and chart styling.
//!
//! The defaults match the server templates. A page may override any subset
//! by embedding a JSON object (see [`AdminUiConfig::from_json`]).

use serde::Deserialize;
use url::form_urlencoded;

/// Id of the brand `<select>` on the dictionary pages.
pub const BRAND_FILTER_ID: &str = "brandFilter";
/// Filtered car-model listing.
pub const MODELS_PATH: &str = "/admin/dict/models";
/// Query parameter carrying the selected brand.
pub const BRAND_QUERY_PARAM: &str = "brand_id";
/// Marker class of server-rendered flash messages.
pub const FLASH_CLASS: &str = "flash-message";
/// How long a flash message stays fully visible.
pub const FLASH_VISIBLE_MS: u32 = 5000;
/// Fade-out duration; the message is removed when it ends.
pub const FLASH_FADE_MS: u32 = 500;
/// Id of the statistics `<canvas>`.
pub const CHART_CANVAS_ID: &str = "appointmentsChart";
/// Appointments-per-day series.
pub const STATS_ENDPOINT: &str = "/api/stats/appointments";
/// Dataset label ("Appointments").
pub const CHART_LABEL: &str = "Записи";
pub const CHART_COLOR: &str = "#2383e2";
pub const CHART_TENSION: f64 = 0.1;
/// Global icon library invoked on page load.
pub const ICON_LIBRARY: &str = "feather";

/// Settings shared by all behaviors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminUiConfig {
    pub brand_filter_id: String,
    pub models_path: String,
    pub brand_query_param: String,
    pub flash_class: String,
    pub flash_visible_ms: u32,
    pub flash_fade_ms: u32,
    pub chart_canvas_id: String,
    pub stats_endpoint: String,
    /// Optional `days` window for the stats endpoint; the server defaults to 30.
    pub stats_days: Option<u32>,
    pub chart_label: String,
    pub chart_color: String,
    pub chart_tension: f64,
    pub icon_library: String,
}

impl Default for AdminUiConfig {
    fn default() -> Self {
        Self {
            brand_filter_id: BRAND_FILTER_ID.to_string(),
            models_path: MODELS_PATH.to_string(),
            brand_query_param: BRAND_QUERY_PARAM.to_string(),
            flash_class: FLASH_CLASS.to_string(),
            flash_visible_ms: FLASH_VISIBLE_MS,
            flash_fade_ms: FLASH_FADE_MS,
            chart_canvas_id: CHART_CANVAS_ID.to_string(),
            stats_endpoint: STATS_ENDPOINT.to_string(),
            stats_days: None,
            chart_label: CHART_LABEL.to_string(),
            chart_color: CHART_COLOR.to_string(),
            chart_tension: CHART_TENSION,
            icon_library: ICON_LIBRARY.to_string(),
        }
    }
}

impl AdminUiConfig {
    /// Parse a (possibly partial) JSON object. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Full path of the stats request, including `days` when configured.
    ///
    /// An endpoint that already carries a query keeps it; `days` is appended.
    pub fn stats_url(&self) -> String {
        let Some(days) = self.stats_days else {
            return self.stats_endpoint.clone();
        };
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("days", &days.to_string())
            .finish();
        let separator = match self.stats_endpoint.find('?') {
            None => "?",
            Some(i) if i + 1 == self.stats_endpoint.len() || self.stats_endpoint.ends_with('&') => "",
            Some(_) => "&",
        };
        format!("{}{}{}", self.stats_endpoint, separator, query)
    }
}

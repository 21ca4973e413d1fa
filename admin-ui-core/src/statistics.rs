//! Appointments-per-day line chart on the statistics page.
//!
//! Data flow:
//! 1. Find `#appointmentsChart`; without it nothing is requested.
//! 2. GET the stats endpoint once and decode `[{date, count}]`.
//! 3. Split the series into parallel label/value vectors (order kept).
//! 4. Hand a Chart.js line config to the chart constructor.
//!
//! There is no refresh: the chart lives until the page goes away.

use crate::config::AdminUiConfig;
use crate::error::LoadError;
use crate::host::{ChartFactory, Dom, JsonSource};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// One point of the stats series.
///
/// Both fields are required: a record with a missing or `null` count fails
/// the whole decode rather than leaving a gap in the line. Unknown fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: f64,
}

/// Chart.js configuration for a single-dataset line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub tension: f64,
}

/// Decode the endpoint body.
pub fn parse_series(body: &str) -> Result<Vec<DailyCount>, LoadError> {
    serde_json::from_str(body).map_err(LoadError::Decode)
}

/// Build the line chart config from a series, keeping its order.
pub fn line_chart(series: &[DailyCount], config: &AdminUiConfig) -> LineChart {
    let (labels, data) = series.iter().map(|p| (p.date.clone(), p.count)).unzip();
    LineChart {
        kind: "line",
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: config.chart_label.clone(),
                data,
                border_color: config.chart_color.clone(),
                tension: config.chart_tension,
            }],
        },
    }
}

/// Fetch the series and draw the chart if the page has a canvas for it.
///
/// Returns `Ok(false)` when there is no canvas (and no request was made).
/// Request, decode and render failures are returned as-is; nothing is
/// retried and nothing is drawn.
pub async fn load<D, J, C>(dom: &D, source: &J, charts: &C, config: &AdminUiConfig) -> Result<bool, LoadError>
where
    D: Dom,
    J: JsonSource,
    C: ChartFactory<D::Node>,
{
    let Some(canvas) = dom.element_by_id(&config.chart_canvas_id) else {
        debug!("no #{} on this page", config.chart_canvas_id);
        return Ok(false);
    };

    let body = source
        .get_text(&config.stats_url())
        .await
        .map_err(LoadError::Fetch)?;
    let series = parse_series(&body)?;
    charts
        .line_chart(&canvas, &line_chart(&series, config))
        .map_err(LoadError::Render)?;

    info!("appointments chart drawn with {} point(s)", series.len());
    Ok(true)
}

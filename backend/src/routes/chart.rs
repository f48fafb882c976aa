//! Chart specifications produced by the update handlers.
//!
//! A [`ChartSpec`] is a complete description of one chart; every handler
//! invocation produces a fresh one that replaces the previous value. The
//! [`ChartSpec::to_figure`] conversion renders it as a Plotly figure so the
//! browser page can draw it without further processing.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::io::columns;
use super::pie::PieChart;
use super::scatter::ScatterChart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    /// Number of plotted data points (slices or markers).
    pub fn len(&self) -> usize {
        match self {
            ChartSpec::Pie(chart) => chart.slices.len(),
            ChartSpec::Scatter(chart) => chart.points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            ChartSpec::Pie(chart) => Some(chart),
            ChartSpec::Scatter(_) => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterChart> {
        match self {
            ChartSpec::Scatter(chart) => Some(chart),
            ChartSpec::Pie(_) => None,
        }
    }

    /// Render as a Plotly figure (`{"data": [...], "layout": {...}}`).
    pub fn to_figure(&self) -> Value {
        match self {
            ChartSpec::Pie(chart) => pie_figure(chart),
            ChartSpec::Scatter(chart) => scatter_figure(chart),
        }
    }
}

impl From<PieChart> for ChartSpec {
    fn from(chart: PieChart) -> Self {
        ChartSpec::Pie(chart)
    }
}

impl From<ScatterChart> for ChartSpec {
    fn from(chart: ScatterChart) -> Self {
        ChartSpec::Scatter(chart)
    }
}

/// A chart spec together with its rendered figure, as sent to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedChart {
    pub chart: ChartSpec,
    pub figure: Value,
}

impl From<ChartSpec> for RenderedChart {
    fn from(chart: ChartSpec) -> Self {
        let figure = chart.to_figure();
        Self { chart, figure }
    }
}

fn pie_figure(chart: &PieChart) -> Value {
    let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
    let values: Vec<u64> = chart.slices.iter().map(|s| s.value).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
            "hovertemplate": format!(
                "{}=%{{label}}<br>{}=%{{value}}<extra></extra>",
                chart.names, chart.values
            ),
        }],
        "layout": {
            "title": { "text": chart.title },
            "legend": { "tracegroupgap": 0 },
        },
    })
}

fn scatter_figure(chart: &ScatterChart) -> Value {
    // One trace per color category, matching a categorical color encoding
    let traces: Vec<Value> = chart
        .categories()
        .into_iter()
        .map(|category| {
            let points: Vec<_> = chart
                .points
                .iter()
                .filter(|p| p.booster_version_category == category)
                .collect();
            let x: Vec<f64> = points.iter().map(|p| p.payload_mass.value()).collect();
            let y: Vec<u8> = points.iter().map(|p| p.class.value()).collect();
            let text: Vec<&str> = points.iter().map(|p| p.launch_site.as_str()).collect();

            let mut hovertemplate = format!(
                "{}={}<br>{}=%{{x}}<br>{}=%{{y}}<br>Launch Site=%{{text}}",
                chart.color, category, chart.x, chart.y
            );

            // Optional hover columns travel as customdata, only when some point has them
            let with_flight = points.iter().any(|p| p.flight_number.is_some());
            let with_booster = points.iter().any(|p| p.booster_version.is_some());
            let mut slot = 0;
            if with_flight {
                hovertemplate.push_str(&format!(
                    "<br>{}=%{{customdata[{}]}}",
                    columns::FLIGHT_NUMBER,
                    slot
                ));
                slot += 1;
            }
            if with_booster {
                hovertemplate.push_str(&format!(
                    "<br>{}=%{{customdata[{}]}}",
                    columns::BOOSTER_VERSION,
                    slot
                ));
            }
            hovertemplate.push_str("<extra></extra>");

            let mut trace = json!({
                "type": "scatter",
                "mode": "markers",
                "name": category,
                "legendgroup": category,
                "x": x,
                "y": y,
                "text": text,
                "hovertemplate": hovertemplate,
            });

            if with_flight || with_booster {
                let customdata: Vec<Value> = points
                    .iter()
                    .map(|p| {
                        let mut row = Vec::with_capacity(2);
                        if with_flight {
                            row.push(json!(p.flight_number));
                        }
                        if with_booster {
                            row.push(json!(p.booster_version));
                        }
                        Value::Array(row)
                    })
                    .collect();
                trace["customdata"] = Value::Array(customdata);
            }

            trace
        })
        .collect();

    json!({
        "data": traces,
        "layout": {
            "title": { "text": chart.title },
            "xaxis": { "title": { "text": chart.x } },
            "yaxis": { "title": { "text": chart.y } },
            "legend": { "title": { "text": chart.color }, "tracegroupgap": 0 },
        },
    })
}

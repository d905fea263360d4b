use serde::Serialize;

use super::chart::{ChartData, ChartDescription, ScatterEncoding, ScatterSeries};

/// Plotly.js figure (`{data, layout}`) ready for `Plotly.react`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotlyFigure {
    pub data: Vec<PlotlyTrace>,
    pub layout: PlotlyLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlotlyTrace {
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
        hovertemplate: String,
    },
    Scatter {
        name: String,
        legendgroup: String,
        mode: &'static str,
        showlegend: bool,
        x: Vec<Option<f64>>,
        y: Vec<u8>,
        customdata: Vec<String>,
        hovertemplate: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotlyText {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotlyAxis {
    pub title: PlotlyText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotlyLegend {
    pub title: PlotlyText,
    #[serde(rename = "tracegrouporder")]
    pub trace_group_order: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotlyLayout {
    pub title: PlotlyText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<PlotlyAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<PlotlyAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<PlotlyLegend>,
}

fn text(value: &str) -> PlotlyText {
    PlotlyText {
        text: value.to_owned(),
    }
}

impl ChartDescription {
    /// Converts the description into a Plotly figure.
    ///
    /// An empty chart keeps only its title. A scatter whose filter matched
    /// nothing still carries its axis and legend titles.
    #[must_use]
    pub fn to_plotly_figure(&self) -> PlotlyFigure {
        let title = text(&self.title);
        match &self.data {
            ChartData::Pie { slices } => PlotlyFigure {
                data: vec![PlotlyTrace::Pie {
                    labels: slices.iter().map(|slice| slice.label.clone()).collect(),
                    values: slices.iter().map(|slice| slice.value).collect(),
                    hovertemplate: "%{label}=%{value}<extra></extra>".to_owned(),
                }],
                layout: PlotlyLayout {
                    title,
                    xaxis: None,
                    yaxis: None,
                    legend: None,
                },
            },
            ChartData::Empty => PlotlyFigure {
                data: Vec::new(),
                layout: PlotlyLayout {
                    title,
                    xaxis: None,
                    yaxis: None,
                    legend: None,
                },
            },
            ChartData::Scatter { encoding, series } => PlotlyFigure {
                data: series
                    .iter()
                    .map(|series| scatter_trace(encoding, series))
                    .collect(),
                layout: PlotlyLayout {
                    title,
                    xaxis: Some(PlotlyAxis {
                        title: text(&encoding.x),
                    }),
                    yaxis: Some(PlotlyAxis {
                        title: text(&encoding.y),
                    }),
                    legend: Some(PlotlyLegend {
                        title: text(&encoding.color),
                        trace_group_order: "normal",
                    }),
                },
            },
        }
    }
}

fn scatter_trace(encoding: &ScatterEncoding, series: &ScatterSeries) -> PlotlyTrace {
    PlotlyTrace::Scatter {
        name: series.category.clone(),
        legendgroup: series.category.clone(),
        mode: "markers",
        showlegend: true,
        x: series.points.iter().map(|p| p.payload_mass_kg).collect(),
        y: series.points.iter().map(|p| p.class).collect(),
        customdata: series.points.iter().map(|p| p.launch_site.clone()).collect(),
        hovertemplate: format!(
            "{color}={category}<br>{x}=%{{x}}<br>{y}=%{{y}}<br>site=%{{customdata}}<extra></extra>",
            color = encoding.color,
            category = series.category,
            x = encoding.x,
            y = encoding.y,
        ),
    }
}

use serde::{Deserialize, Serialize};

use crate::core::{BOOSTER_CATEGORY_COLUMN, CLASS_COLUMN, PAYLOAD_MASS_COLUMN};

/// One pie slice: a category label sized by a row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

impl PieSlice {
    #[must_use]
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One scatter point. `launch_site` rides along for hover text.
///
/// `payload_mass_kg` is `None` for a row whose payload cell was empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: Option<f64>,
    pub class: u8,
    pub launch_site: String,
}

/// Points sharing one color category, in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub category: String,
    pub points: Vec<ScatterPoint>,
}

/// Column names bound to the scatter's visual channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterEncoding {
    pub x: String,
    pub y: String,
    pub color: String,
}

impl Default for ScatterEncoding {
    fn default() -> Self {
        Self {
            x: PAYLOAD_MASS_COLUMN.to_owned(),
            y: CLASS_COLUMN.to_owned(),
            color: BOOSTER_CATEGORY_COLUMN.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartData {
    /// Nothing to plot; only the title is shown.
    Empty,
    Pie {
        slices: Vec<PieSlice>,
    },
    Scatter {
        encoding: ScatterEncoding,
        series: Vec<ScatterSeries>,
    },
}

/// Declarative, renderer-agnostic chart handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub title: String,
    pub data: ChartData,
}

impl ChartDescription {
    #[must_use]
    pub fn pie(title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        Self {
            title: title.into(),
            data: ChartData::Pie { slices },
        }
    }

    #[must_use]
    pub fn scatter(title: impl Into<String>, series: Vec<ScatterSeries>) -> Self {
        Self {
            title: title.into(),
            data: ChartData::Scatter {
                encoding: ScatterEncoding::default(),
                series,
            },
        }
    }

    /// Title-only chart used when the data cannot be plotted at all.
    #[must_use]
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            data: ChartData::Empty,
        }
    }

    /// Pie slices, or an empty slice for other charts.
    #[must_use]
    pub fn slices(&self) -> &[PieSlice] {
        match &self.data {
            ChartData::Pie { slices } => slices,
            ChartData::Scatter { .. } | ChartData::Empty => &[],
        }
    }

    /// Scatter series, or an empty slice for other charts.
    #[must_use]
    pub fn series(&self) -> &[ScatterSeries] {
        match &self.data {
            ChartData::Scatter { series, .. } => series,
            ChartData::Pie { .. } | ChartData::Empty => &[],
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.series().iter().flat_map(|series| series.points.iter())
    }

    #[must_use]
    pub fn slice_total(&self) -> u64 {
        self.slices().iter().map(|slice| slice.value).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices().is_empty() && self.series().is_empty()
    }
}

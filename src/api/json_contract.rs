use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};
use crate::render::{ChartDescription, PageLayout};

pub const CHART_DESCRIPTION_JSON_SCHEMA_V1: u32 = 1;
pub const PAGE_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptionJsonContractV1 {
    pub schema_version: u32,
    pub chart: ChartDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: PageLayout,
}

impl ChartDescription {
    pub fn to_json_contract_v1_pretty(&self) -> DashResult<String> {
        let payload = ChartDescriptionJsonContractV1 {
            schema_version: CHART_DESCRIPTION_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashError::InvalidData(format!("failed to serialize chart contract v1: {e}"))
        })
    }

    /// Accepts either a bare chart description or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> DashResult<Self> {
        if let Ok(chart) = serde_json::from_str::<ChartDescription>(input) {
            return Ok(chart);
        }
        let payload: ChartDescriptionJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DashError::InvalidData(format!("failed to parse chart json payload: {e}"))
        })?;
        if payload.schema_version != CHART_DESCRIPTION_JSON_SCHEMA_V1 {
            return Err(DashError::InvalidData(format!(
                "unsupported chart schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.chart)
    }
}

impl PageLayout {
    pub fn to_json_contract_v1_pretty(&self) -> DashResult<String> {
        let payload = PageLayoutJsonContractV1 {
            schema_version: PAGE_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> DashResult<Self> {
        if let Ok(layout) = serde_json::from_str::<PageLayout>(input) {
            return Ok(layout);
        }
        let payload: PageLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DashError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != PAGE_LAYOUT_JSON_SCHEMA_V1 {
            return Err(DashError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}

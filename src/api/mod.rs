mod dashboard;
mod json_contract;
mod layout_builder;
mod pie_aggregator;
mod scatter_filter;

pub use dashboard::Dashboard;
pub use json_contract::{
    CHART_DESCRIPTION_JSON_SCHEMA_V1, ChartDescriptionJsonContractV1, PAGE_LAYOUT_JSON_SCHEMA_V1,
    PageLayoutJsonContractV1,
};
pub use layout_builder::{
    DASHBOARD_TITLE, PAYLOAD_SLIDER_ID, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN,
    PAYLOAD_SLIDER_STEP, PIE_CHART_ID, PIE_ENDPOINT, SCATTER_CHART_ID, SCATTER_ENDPOINT,
    SITE_DROPDOWN_ID, build_layout,
};
pub use pie_aggregator::{ALL_SITES_PIE_TITLE, compute_pie};
pub use scatter_filter::compute_scatter;

pub mod dataset;
pub mod types;

pub use dataset::{ColumnSet, Dataset};
pub use types::{
    ALL_SITES, BOOSTER_CATEGORY_COLUMN, CLASS_COLUMN, LAUNCH_SITE_COLUMN, LaunchRecord, Outcome,
    PAYLOAD_MASS_COLUMN, PayloadBounds, SiteSelection,
};

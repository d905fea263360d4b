use std::path::Path;

use crate::core::{Dataset, PayloadBounds, SiteSelection};
use crate::data;
use crate::error::DashResult;
use crate::render::{ChartDescription, PageLayout};

use super::{build_layout, compute_pie, compute_scatter};

/// Dataset plus the page built from it, owned for the life of the process.
///
/// Both callbacks borrow the dataset immutably, so a `Dashboard` can be shared
/// behind an `Arc` across concurrent requests.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    layout: PageLayout,
}

impl Dashboard {
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        let layout = build_layout(&dataset);
        Self { dataset, layout }
    }

    /// Loads the launch file (placeholder on a missing file) and builds the page.
    pub fn open(path: impl AsRef<Path>) -> DashResult<Self> {
        Ok(Self::new(data::load(path)?))
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn pie(&self, selected_site: &SiteSelection) -> ChartDescription {
        compute_pie(selected_site, &self.dataset)
    }

    #[must_use]
    pub fn scatter(
        &self,
        selected_site: &SiteSelection,
        interval: Option<PayloadBounds>,
    ) -> ChartDescription {
        compute_scatter(selected_site, interval, &self.dataset)
    }
}

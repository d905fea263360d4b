use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Dataset, Outcome, SiteSelection};
use crate::render::{ChartDescription, PieSlice};

pub const ALL_SITES_PIE_TITLE: &str = "Total Successful Launches by Site";

/// Computes the pie chart for the current site selection.
///
/// - all sites: one slice per site sized by its successful launches, in
///   first-seen site order;
/// - one site: `Success`/`Failure` slices sized by row count, largest first.
///   Outcomes with no rows produce no slice, so an unknown site yields a
///   chart without slices.
#[must_use]
pub fn compute_pie(selected_site: &SiteSelection, dataset: &Dataset) -> ChartDescription {
    match selected_site {
        SiteSelection::All => {
            let mut per_site: IndexMap<&str, u64> = IndexMap::new();
            for record in dataset.records().iter().filter(|r| r.is_success()) {
                *per_site.entry(record.launch_site.as_str()).or_default() += 1;
            }
            debug!(sites = per_site.len(), "computed all-sites success pie");
            let slices = per_site
                .into_iter()
                .map(|(site, count)| PieSlice::new(site, count))
                .collect();
            ChartDescription::pie(ALL_SITES_PIE_TITLE, slices)
        }
        SiteSelection::Site(site) => {
            let mut per_outcome: IndexMap<Outcome, u64> = IndexMap::new();
            for record in dataset
                .records()
                .iter()
                .filter(|r| r.launch_site == *site)
            {
                *per_outcome.entry(record.outcome).or_default() += 1;
            }
            let mut counts: Vec<(Outcome, u64)> = per_outcome.into_iter().collect();
            // Stable, so equal counts keep first-seen order.
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            debug!(site = %site, outcomes = counts.len(), "computed site outcome pie");
            let slices = counts
                .into_iter()
                .map(|(outcome, count)| PieSlice::new(outcome.label(), count))
                .collect();
            ChartDescription::pie(
                format!("Successful vs. Failed Launches for site {site}"),
                slices,
            )
        }
    }
}

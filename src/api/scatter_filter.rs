use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{Dataset, LaunchRecord, PAYLOAD_MASS_COLUMN, PayloadBounds, SiteSelection};
use crate::render::{ChartDescription, ScatterPoint, ScatterSeries};

/// Computes the payload-vs-outcome scatter for the current selection.
///
/// `interval` is `None` when the range selector sent something that is not a
/// pair of finite numbers; the payload filter is then skipped. Bounds are
/// inclusive on both ends.
#[must_use]
pub fn compute_scatter(
    selected_site: &SiteSelection,
    interval: Option<PayloadBounds>,
    dataset: &Dataset,
) -> ChartDescription {
    if !dataset.has_payload_column() {
        warn!("scatter requested without a payload column");
        return ChartDescription::empty(format!("{PAYLOAD_MASS_COLUMN} column missing"));
    }
    if interval.is_none() {
        debug!("payload interval is not numeric; skipping payload filter");
    }

    let in_interval = |record: &&LaunchRecord| {
        interval.is_none_or(|bounds| bounds.contains(record.payload_mass_kg))
    };

    let mut by_category: IndexMap<&str, Vec<ScatterPoint>> = IndexMap::new();
    for record in dataset
        .records()
        .iter()
        .filter(in_interval)
        .filter(|record| selected_site.matches(record))
    {
        by_category
            .entry(record.booster_version_category.as_str())
            .or_default()
            .push(ScatterPoint {
                payload_mass_kg: (!record.payload_mass_kg.is_nan())
                    .then_some(record.payload_mass_kg),
                class: record.outcome.class(),
                launch_site: record.launch_site.clone(),
            });
    }

    let series: Vec<ScatterSeries> = by_category
        .into_iter()
        .map(|(category, points)| ScatterSeries {
            category: category.to_owned(),
            points,
        })
        .collect();
    debug!(
        site = selected_site.as_value(),
        categories = series.len(),
        points = series.iter().map(|s| s.points.len()).sum::<usize>(),
        "computed payload scatter"
    );

    let title = match selected_site {
        SiteSelection::All => "Payload vs. Launch Outcome for All Sites".to_owned(),
        SiteSelection::Site(site) => format!("Payload vs. Launch Outcome for site {site}"),
    };
    ChartDescription::scatter(title, series)
}

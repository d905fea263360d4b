use launch_dash::api::{ALL_SITES_PIE_TITLE, compute_pie};
use launch_dash::core::{Dataset, LaunchRecord, Outcome, SiteSelection};
use launch_dash::render::PieSlice;

fn worked_example() -> Dataset {
    Dataset::new(vec![
        LaunchRecord::new(500.0, "A", Outcome::Success, "B1"),
        LaunchRecord::new(500.0, "A", Outcome::Failure, "B2"),
        LaunchRecord::new(9000.0, "B", Outcome::Success, "B1"),
    ])
}

#[test]
fn all_sites_counts_successes_per_site() {
    let chart = compute_pie(&SiteSelection::All, &worked_example());

    assert_eq!(chart.title, ALL_SITES_PIE_TITLE);
    assert_eq!(
        chart.slices(),
        &[PieSlice::new("A", 1), PieSlice::new("B", 1)]
    );
}

#[test]
fn single_site_splits_success_and_failure() {
    let chart = compute_pie(&SiteSelection::from_value("A"), &worked_example());

    assert_eq!(chart.title, "Successful vs. Failed Launches for site A");
    let mut labels: Vec<&str> = chart.slices().iter().map(|s| s.label.as_str()).collect();
    labels.sort_unstable();
    assert_eq!(labels, vec!["Failure", "Success"]);
    assert!(chart.slices().iter().all(|s| s.value == 1));
}

#[test]
fn all_sites_keeps_first_seen_order_and_skips_sites_without_success() {
    let dataset = Dataset::new(vec![
        LaunchRecord::new(1.0, "C", Outcome::Failure, "v1.0"),
        LaunchRecord::new(1.0, "B", Outcome::Success, "FT"),
        LaunchRecord::new(1.0, "A", Outcome::Success, "FT"),
        LaunchRecord::new(1.0, "B", Outcome::Success, "B4"),
    ]);
    let chart = compute_pie(&SiteSelection::All, &dataset);

    assert_eq!(
        chart.slices(),
        &[PieSlice::new("B", 2), PieSlice::new("A", 1)]
    );
}

#[test]
fn single_site_orders_slices_by_count_and_omits_empty_outcomes() {
    let dataset = Dataset::new(vec![
        LaunchRecord::new(1.0, "A", Outcome::Success, "FT"),
        LaunchRecord::new(1.0, "A", Outcome::Failure, "FT"),
        LaunchRecord::new(1.0, "A", Outcome::Failure, "FT"),
        LaunchRecord::new(1.0, "B", Outcome::Success, "FT"),
    ]);

    let chart = compute_pie(&SiteSelection::from_value("A"), &dataset);
    assert_eq!(
        chart.slices(),
        &[PieSlice::new("Failure", 2), PieSlice::new("Success", 1)]
    );

    let chart = compute_pie(&SiteSelection::from_value("B"), &dataset);
    assert_eq!(chart.slices(), &[PieSlice::new("Success", 1)]);
}

#[test]
fn unknown_site_yields_chart_without_slices() {
    let chart = compute_pie(&SiteSelection::from_value("Nowhere"), &worked_example());

    assert!(chart.is_empty());
    assert_eq!(chart.slice_total(), 0);
    assert_eq!(chart.title, "Successful vs. Failed Launches for site Nowhere");
}

#[test]
fn placeholder_dataset_has_no_successful_slices() {
    let chart = compute_pie(&SiteSelection::All, &Dataset::placeholder());
    assert!(chart.slices().is_empty());

    let chart = compute_pie(&SiteSelection::from_value("Default"), &Dataset::placeholder());
    assert_eq!(chart.slices(), &[PieSlice::new("Failure", 1)]);
}

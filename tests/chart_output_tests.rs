use launch_dash::api::{CHART_DESCRIPTION_JSON_SCHEMA_V1, build_layout, compute_pie, compute_scatter};
use launch_dash::core::{ColumnSet, Dataset, LaunchRecord, Outcome, PayloadBounds, SiteSelection};
use launch_dash::render::{ChartDescription, PageLayout};
use serde_json::Value;

fn dataset() -> Dataset {
    Dataset::new(vec![
        LaunchRecord::new(500.0, "A", Outcome::Success, "B1"),
        LaunchRecord::new(500.0, "A", Outcome::Failure, "B2"),
        LaunchRecord::new(9000.0, "B", Outcome::Success, "B1"),
    ])
}

fn figure_json(chart: &ChartDescription) -> Value {
    serde_json::to_value(chart.to_plotly_figure()).expect("figure json")
}

#[test]
fn pie_figure_has_single_pie_trace() {
    let figure = figure_json(&compute_pie(&SiteSelection::All, &dataset()));

    let traces = figure["data"].as_array().expect("data");
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0]["type"], "pie");
    assert_eq!(traces[0]["labels"], serde_json::json!(["A", "B"]));
    assert_eq!(traces[0]["values"], serde_json::json!([1, 1]));
    assert_eq!(
        figure["layout"]["title"]["text"],
        "Total Successful Launches by Site"
    );
}

#[test]
fn scatter_figure_has_one_marker_trace_per_category() {
    let chart = compute_scatter(&SiteSelection::All, PayloadBounds::new(0.0, 10_000.0), &dataset());
    let figure = figure_json(&chart);

    let traces = figure["data"].as_array().expect("data");
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0]["type"], "scatter");
    assert_eq!(traces[0]["mode"], "markers");
    assert_eq!(traces[0]["name"], "B1");
    assert_eq!(traces[0]["x"], serde_json::json!([500.0, 9000.0]));
    assert_eq!(traces[0]["y"], serde_json::json!([1, 1]));
    assert_eq!(traces[1]["customdata"], serde_json::json!(["A"]));
    assert_eq!(figure["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");
    assert_eq!(figure["layout"]["yaxis"]["title"]["text"], "class");
    assert_eq!(
        figure["layout"]["legend"]["title"]["text"],
        "Booster Version Category"
    );
}

#[test]
fn missing_column_figure_keeps_only_its_title() {
    let dataset = Dataset::with_columns(
        Vec::new(),
        ColumnSet {
            payload_mass: false,
            ..ColumnSet::all()
        },
    );
    let figure = figure_json(&compute_scatter(&SiteSelection::All, None, &dataset));

    assert_eq!(figure["data"], serde_json::json!([]));
    assert_eq!(
        figure["layout"]["title"]["text"],
        "Payload Mass (kg) column missing"
    );
    assert!(figure["layout"].get("xaxis").is_none());
}

#[test]
fn chart_contract_accepts_wrapped_and_bare_payloads() {
    let chart = compute_pie(&SiteSelection::from_value("A"), &dataset());

    let wrapped = chart.to_json_contract_v1_pretty().expect("serialize");
    let parsed: Value = serde_json::from_str(&wrapped).expect("json");
    assert_eq!(parsed["schema_version"], CHART_DESCRIPTION_JSON_SCHEMA_V1);
    assert_eq!(parsed["chart"]["data"]["type"], "pie");
    assert_eq!(
        ChartDescription::from_json_compat_str(&wrapped).expect("wrapped"),
        chart
    );

    let bare = serde_json::to_string(&chart).expect("bare");
    assert_eq!(
        ChartDescription::from_json_compat_str(&bare).expect("bare"),
        chart
    );
}

#[test]
fn scatter_contract_round_trips_missing_payloads() {
    let dataset = Dataset::new(vec![
        LaunchRecord::new(f64::NAN, "A", Outcome::Success, "B1"),
        LaunchRecord::new(200.0, "A", Outcome::Success, "B1"),
    ]);
    let chart = compute_scatter(&SiteSelection::All, None, &dataset);
    let payloads: Vec<_> = chart.points().map(|p| p.payload_mass_kg).collect();
    assert_eq!(payloads, vec![None, Some(200.0)]);

    let json = chart.to_json_contract_v1_pretty().expect("serialize");
    assert_eq!(
        ChartDescription::from_json_compat_str(&json).expect("parse"),
        chart
    );
    let figure = figure_json(&chart);
    assert_eq!(figure["data"][0]["x"], serde_json::json!([null, 200.0]));
}

#[test]
fn unmatched_scatter_keeps_axis_and_legend_titles() {
    let chart = compute_scatter(&SiteSelection::from_value("B"), PayloadBounds::new(0.0, 1000.0), &dataset());
    assert!(chart.is_empty());
    let figure = figure_json(&chart);

    assert_eq!(figure["data"], serde_json::json!([]));
    assert_eq!(figure["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");
    assert_eq!(figure["layout"]["yaxis"]["title"]["text"], "class");
    assert_eq!(
        figure["layout"]["legend"]["title"]["text"],
        "Booster Version Category"
    );
}

#[test]
fn missing_column_chart_serializes_as_empty_data() {
    let chart = ChartDescription::empty("Payload Mass (kg) column missing");
    let value = serde_json::to_value(&chart).expect("json");
    assert_eq!(value["data"], serde_json::json!({"type": "empty"}));
    assert_eq!(
        ChartDescription::from_json_compat_str(&value.to_string()).expect("parse"),
        chart
    );
}

#[test]
fn chart_contract_rejects_unknown_schema_version() {
    let payload = r#"{"schema_version": 7, "chart": {"title": "t", "data": {"type": "pie", "slices": []}}}"#;
    let err = ChartDescription::from_json_compat_str(payload).expect_err("version 7");
    assert!(err.to_string().contains("unsupported chart schema version: 7"));
}

#[test]
fn layout_contract_round_trips() {
    let layout = build_layout(&dataset());
    let json = layout.to_json_contract_v1_pretty().expect("serialize");
    assert_eq!(PageLayout::from_json_compat_str(&json).expect("parse"), layout);
}

#[test]
fn site_selection_serializes_as_selector_value() {
    assert_eq!(
        serde_json::to_string(&SiteSelection::All).expect("json"),
        r#""ALL""#
    );
    let site: SiteSelection = serde_json::from_str(r#""KSC LC-39A""#).expect("site");
    assert_eq!(site, SiteSelection::Site("KSC LC-39A".to_owned()));
}

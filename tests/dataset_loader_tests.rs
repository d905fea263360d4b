use std::io::Write;

use approx::assert_relative_eq;
use launch_dash::DashError;
use launch_dash::core::{Dataset, Outcome};
use launch_dash::data::{load, read_dataset};

const LAUNCH_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
3,4,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
4,5,CCAFS LC-40,1,4600.0,F9 B4 B1045.1,B4
";

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn missing_file_yields_single_placeholder_row() {
    let dir = tempfile::tempdir().expect("temp dir");
    let dataset = load(dir.path().join("spacex_launch_dash.csv")).expect("placeholder");

    assert_eq!(dataset, Dataset::placeholder());
    assert_eq!(dataset.len(), 1);
    assert!(dataset.has_payload_column());
    assert_eq!(dataset.columns().names().len(), 4);

    let row = &dataset.records()[0];
    assert_eq!(row.launch_site, "Default");
    assert_eq!(row.booster_version_category, "Default");
    assert_eq!(row.payload_mass_kg, 0.0);
    assert_eq!(row.outcome, Outcome::Failure);
}

#[test]
fn load_keeps_row_order_and_ignores_extra_columns() {
    let file = write_csv(LAUNCH_CSV);
    let dataset = load(file.path()).expect("load");

    assert_eq!(dataset.len(), 5);
    assert_eq!(
        dataset.distinct_sites(),
        vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
    );
    let third = &dataset.records()[2];
    assert_relative_eq!(third.payload_mass_kg, 500.0);
    assert_eq!(third.outcome, Outcome::Success);
    assert_eq!(third.booster_version_category, "v1.1");
    assert_eq!(dataset.payload_extent(), Some((0.0, 4600.0)));
}

#[test]
fn file_without_payload_column_loads_with_column_flagged_absent() {
    let dataset = read_dataset(
        "Launch Site,class,Booster Version Category\nA,1,FT\nB,0,v1.1\n".as_bytes(),
    )
    .expect("load");

    assert_eq!(dataset.len(), 2);
    assert!(!dataset.has_payload_column());
    assert!(dataset.records().iter().all(|r| r.payload_mass_kg.is_nan()));
    assert_eq!(dataset.payload_extent(), None);
}

#[test]
fn file_without_site_column_is_rejected() {
    let err = read_dataset("class,Booster Version Category\n1,FT\n".as_bytes())
        .expect_err("site column is required");
    assert!(matches!(err, DashError::MissingColumn("Launch Site")));
}

#[test]
fn empty_payload_cells_are_missing_values() {
    let dataset = read_dataset(
        "Launch Site,class,Payload Mass (kg),Booster Version Category\nA,1,,FT\nA,0,700,FT\n"
            .as_bytes(),
    )
    .expect("load");

    assert!(dataset.records()[0].payload_mass_kg.is_nan());
    assert_eq!(dataset.payload_extent(), Some((700.0, 700.0)));
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let file = write_csv("Launch Site,class,Payload Mass (kg),Booster Version Category\n");
    let dataset = load(file.path()).expect("load");
    assert!(dataset.is_empty());
    assert_eq!(dataset.payload_extent(), None);
}

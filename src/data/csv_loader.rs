use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::core::{ColumnSet, Dataset, LaunchRecord, Outcome, PAYLOAD_MASS_COLUMN};
use crate::error::{DashError, DashResult};

/// Default launch file name, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Payload Mass (kg)", default)]
    payload_mass_kg: Option<f64>,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl RawLaunchRow {
    fn into_record(self) -> DashResult<LaunchRecord> {
        Ok(LaunchRecord::new(
            self.payload_mass_kg.unwrap_or(f64::NAN),
            self.launch_site,
            Outcome::from_class(self.class)?,
            self.booster_version_category,
        ))
    }
}

/// Loads the launch table from `path`.
///
/// A missing file is not an error: a diagnostic is logged and the one-row
/// placeholder table is returned so every view still finds its columns.
/// Any other read or parse failure is returned to the caller.
pub fn load(path: impl AsRef<Path>) -> DashResult<Dataset> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                "launch data file not found; using placeholder dataset"
            );
            return Ok(Dataset::placeholder());
        }
        Err(source) => {
            return Err(DashError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let dataset = read_dataset(file)?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        sites = dataset.distinct_sites().len(),
        "loaded launch dataset"
    );
    Ok(dataset)
}

/// Parses launch records from any CSV source with a header row.
///
/// Extra columns are ignored. The payload column may be absent, in which
/// case every payload is missing and the column is flagged absent.
pub fn read_dataset<R: Read>(reader: R) -> DashResult<Dataset> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = ColumnSet::from_headers(headers.iter());
    if let Some(missing) = columns.first_missing_required() {
        return Err(DashError::MissingColumn(missing));
    }
    if !columns.payload_mass {
        warn!(
            column = PAYLOAD_MASS_COLUMN,
            "launch data has no payload column; scatter view will be empty"
        );
    }

    let mut records = Vec::new();
    for (index, row) in rdr.deserialize::<RawLaunchRow>().enumerate() {
        let record = row?.into_record().map_err(|err| {
            DashError::InvalidData(format!("row {}: {err}", index + 1))
        })?;
        records.push(record);
    }

    debug!(
        rows = records.len(),
        columns = ?columns.names(),
        "parsed launch csv"
    );
    Ok(Dataset::with_columns(records, columns))
}

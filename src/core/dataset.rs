use indexmap::IndexSet;
use ordered_float::OrderedFloat;

use super::types::{
    BOOSTER_CATEGORY_COLUMN, CLASS_COLUMN, LAUNCH_SITE_COLUMN, LaunchRecord, Outcome,
    PAYLOAD_MASS_COLUMN,
};

/// Which of the four launch columns the source table carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSet {
    pub payload_mass: bool,
    pub launch_site: bool,
    pub class: bool,
    pub booster_version_category: bool,
}

impl ColumnSet {
    #[must_use]
    pub fn all() -> Self {
        Self {
            payload_mass: true,
            launch_site: true,
            class: true,
            booster_version_category: true,
        }
    }

    /// Detects known columns in a header row; unknown headers are ignored.
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut columns = Self {
            payload_mass: false,
            launch_site: false,
            class: false,
            booster_version_category: false,
        };
        for header in headers {
            match header.trim() {
                PAYLOAD_MASS_COLUMN => columns.payload_mass = true,
                LAUNCH_SITE_COLUMN => columns.launch_site = true,
                CLASS_COLUMN => columns.class = true,
                BOOSTER_CATEGORY_COLUMN => columns.booster_version_category = true,
                _ => {}
            }
        }
        columns
    }

    /// First column, in table order, that every view needs but the source lacks.
    ///
    /// The payload column is not required: only the scatter view reads it and
    /// that view degrades to a labelled empty chart without it.
    #[must_use]
    pub fn first_missing_required(self) -> Option<&'static str> {
        if !self.launch_site {
            Some(LAUNCH_SITE_COLUMN)
        } else if !self.class {
            Some(CLASS_COLUMN)
        } else if !self.booster_version_category {
            Some(BOOSTER_CATEGORY_COLUMN)
        } else {
            None
        }
    }

    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [
            (self.payload_mass, PAYLOAD_MASS_COLUMN),
            (self.launch_site, LAUNCH_SITE_COLUMN),
            (self.class, CLASS_COLUMN),
            (self.booster_version_category, BOOSTER_CATEGORY_COLUMN),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Immutable, ordered table of launch records loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    columns: ColumnSet,
}

impl Dataset {
    #[must_use]
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self::with_columns(records, ColumnSet::all())
    }

    #[must_use]
    pub fn with_columns(records: Vec<LaunchRecord>, columns: ColumnSet) -> Self {
        Self { records, columns }
    }

    /// Single-row stand-in used when the launch file cannot be found.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(vec![LaunchRecord::new(
            0.0,
            "Default",
            Outcome::Failure,
            "Default",
        )])
    }

    #[must_use]
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    #[must_use]
    pub fn columns(&self) -> ColumnSet {
        self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn has_payload_column(&self) -> bool {
        self.columns.payload_mass
    }

    /// Distinct launch sites in first-seen order.
    #[must_use]
    pub fn distinct_sites(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.launch_site.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Smallest and largest payload, skipping missing values.
    #[must_use]
    pub fn payload_extent(&self) -> Option<(f64, f64)> {
        if !self.columns.payload_mass {
            return None;
        }
        let payloads = self
            .records
            .iter()
            .map(|record| record.payload_mass_kg)
            .filter(|payload| !payload.is_nan())
            .map(OrderedFloat);
        let min = payloads.clone().min()?;
        let max = payloads.max()?;
        Some((min.into_inner(), max.into_inner()))
    }
}

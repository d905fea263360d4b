use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};

pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

/// Sentinel value the site selector emits for the all-sites view.
pub const ALL_SITES: &str = "ALL";

/// Binary launch outcome as stored in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Maps a raw `class` cell (`0`, `1`, `0.0`, `1.0`) to an outcome.
    pub fn from_class(value: f64) -> DashResult<Self> {
        if value == 1.0 {
            Ok(Self::Success)
        } else if value == 0.0 {
            Ok(Self::Failure)
        } else {
            Err(DashError::InvalidData(format!(
                "outcome class must be 0 or 1, got {value}"
            )))
        }
    }

    #[must_use]
    pub fn class(self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Failure => "Failure",
            Self::Success => "Success",
        }
    }
}

/// One launch attempt.
///
/// `payload_mass_kg` is `NaN` when the source cell was empty or the payload
/// column was absent; such a record never falls inside a payload interval.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub payload_mass_kg: f64,
    pub launch_site: String,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

impl LaunchRecord {
    #[must_use]
    pub fn new(
        payload_mass_kg: f64,
        launch_site: impl Into<String>,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            payload_mass_kg,
            launch_site: launch_site.into(),
            outcome,
            booster_version_category: booster_version_category.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Current value of the site selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interprets a raw selector value; `"ALL"` is the all-sites sentinel.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value.to_owned())
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(site) => site,
        }
    }

    #[must_use]
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            Self::All => true,
            Self::Site(site) => record.launch_site == *site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_owned(),
            SiteSelection::Site(site) => site,
        }
    }
}

/// Inclusive payload interval emitted by the range selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub low: f64,
    pub high: f64,
}

impl PayloadBounds {
    /// Builds an interval when both bounds are finite numbers.
    ///
    /// `low > high` is accepted and simply matches nothing.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Option<Self> {
        if low.is_finite() && high.is_finite() {
            Some(Self { low, high })
        } else {
            None
        }
    }

    /// Builds an interval from optional raw bounds; any missing or
    /// non-finite bound yields `None`.
    #[must_use]
    pub fn from_raw(low: Option<f64>, high: Option<f64>) -> Option<Self> {
        Self::new(low?, high?)
    }

    /// Parses the two textual bounds a query string carries.
    #[must_use]
    pub fn parse(low: Option<&str>, high: Option<&str>) -> Option<Self> {
        let parse_bound = |raw: Option<&str>| raw.and_then(|value| value.trim().parse::<f64>().ok());
        Self::from_raw(parse_bound(low), parse_bound(high))
    }

    #[must_use]
    pub fn contains(self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

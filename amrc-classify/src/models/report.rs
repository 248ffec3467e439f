//! Report input types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optional report metadata
///
/// Recognized keys are `aircraft_type` and `report_date`; anything else in
/// the source map is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    #[serde(default)]
    pub aircraft_type: Option<String>,
    #[serde(default)]
    pub report_date: Option<String>,
}

impl ReportMetadata {
    pub fn new(aircraft_type: Option<String>, report_date: Option<String>) -> Self {
        Self {
            aircraft_type,
            report_date,
        }
    }

    /// Build from a loose string map
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        Self {
            aircraft_type: map.get("aircraft_type").cloned(),
            report_date: map.get("report_date").cloned(),
        }
    }

    /// True when neither field carries a non-blank value
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        blank(&self.aircraft_type) && blank(&self.report_date)
    }
}

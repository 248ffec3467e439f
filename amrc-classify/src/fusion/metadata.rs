// Metadata Enrichment - Annotations from Report Metadata
//
// Metadata never changes scores; it only adds processing notes.

use crate::models::{ISpecClassification, ReportMetadata};
use chrono::{DateTime, NaiveDate};
use tracing::debug;

/// Notes describing the supplied report metadata
pub fn enrich(metadata: &ReportMetadata, ispec: &ISpecClassification) -> Vec<String> {
    let mut notes = Vec::new();

    if let Some(aircraft_type) = metadata
        .aircraft_type
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let aircraft_type = aircraft_type.to_lowercase();
        if aircraft_type.contains("737") && ispec.identified_parts.iter().any(|p| p == "winglet") {
            notes.push(format!(
                "Winglet parts consistent with {} aircraft",
                aircraft_type
            ));
        }
        notes.push(format!(
            "Classification applied to {} maintenance report",
            aircraft_type
        ));
    }

    if let Some(report_date) = metadata
        .report_date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        if !is_iso8601(report_date) {
            debug!(report_date, "Report date is not ISO-8601, noting verbatim");
        }
        notes.push(format!(
            "Report classified for maintenance performed on {}",
            report_date
        ));
    }

    notes
}

/// Accepts a calendar date (`2024-03-15`) or an RFC 3339 timestamp
fn is_iso8601(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() || DateTime::parse_from_rfc3339(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winglet_parts() -> ISpecClassification {
        ISpecClassification {
            identified_parts: vec!["leading edge".to_string(), "winglet".to_string()],
            ..ISpecClassification::empty()
        }
    }

    #[test]
    fn test_no_metadata_no_notes() {
        assert!(enrich(&ReportMetadata::default(), &winglet_parts()).is_empty());
    }

    #[test]
    fn test_full_metadata() {
        let metadata = ReportMetadata::new(
            Some("Boeing 737-800".to_string()),
            Some("2024-03-15".to_string()),
        );
        assert_eq!(
            enrich(&metadata, &winglet_parts()),
            vec![
                "Winglet parts consistent with boeing 737-800 aircraft",
                "Classification applied to boeing 737-800 maintenance report",
                "Report classified for maintenance performed on 2024-03-15",
            ]
        );
    }

    #[test]
    fn test_non_737_skips_winglet_note() {
        let metadata = ReportMetadata::new(Some("A320neo".to_string()), None);
        assert_eq!(
            enrich(&metadata, &winglet_parts()),
            vec!["Classification applied to a320neo maintenance report"]
        );
    }

    #[test]
    fn test_blank_values_ignored() {
        let metadata = ReportMetadata::new(Some("  ".to_string()), Some(String::new()));
        assert!(enrich(&metadata, &ISpecClassification::empty()).is_empty());
    }

    #[test]
    fn test_unparsed_date_noted_verbatim() {
        let metadata = ReportMetadata::new(None, Some("March 15th".to_string()));
        assert_eq!(
            enrich(&metadata, &ISpecClassification::empty()),
            vec!["Report classified for maintenance performed on March 15th"]
        );
        assert!(is_iso8601("2024-03-15T08:30:00Z"));
        assert!(!is_iso8601("March 15th"));
    }
}

//! Classification result types
//!
//! Every result is built fresh per call. The `empty()` constructors give the
//! sentinel result used for blank input and degraded calls.

use crate::taxonomy::{
    DefectType, MaintenanceAction, PartCategory, Severity, UNKNOWN_CHAPTER_CODE,
    UNKNOWN_CHAPTER_NAME,
};
use serde::{Deserialize, Serialize};

/// Confidence score (0.0-1.0)
pub type Confidence = f64;

/// Processing note recorded for blank input
pub const EMPTY_INPUT_NOTE: &str = "Empty or invalid report text";

/// Prefix of the processing note recorded for a degraded call
pub const DEGRADED_NOTE_PREFIX: &str = "Classification processing error";

/// Clamp a raw score into [0, 1]
pub fn clamp_confidence(value: f64) -> Confidence {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Round to 3 decimals (API boundary rounding)
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// ATA Spec 100 chapter assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtaClassification {
    pub chapter: String,
    pub chapter_name: String,
    pub confidence: Confidence,
    pub matched_keywords: Vec<String>,
}

impl AtaClassification {
    /// Sentinel ("00", "Unknown")
    pub fn empty() -> Self {
        Self {
            chapter: UNKNOWN_CHAPTER_CODE.to_string(),
            chapter_name: UNKNOWN_CHAPTER_NAME.to_string(),
            confidence: 0.0,
            matched_keywords: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.chapter == UNKNOWN_CHAPTER_CODE
    }
}

impl Default for AtaClassification {
    fn default() -> Self {
        Self::empty()
    }
}

/// iSpec 2200 part identification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ISpecClassification {
    pub part_categories: Vec<PartCategory>,
    pub identified_parts: Vec<String>,
    pub confidence: Confidence,
    pub part_numbers: Vec<String>,
}

impl ISpecClassification {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether any identified part name contains `needle`
    pub fn has_part_containing(&self, needle: &str) -> bool {
        self.identified_parts.iter().any(|p| p.contains(needle))
    }
}

/// Defect type, maintenance action and severity profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefectClassification {
    pub defect_types: Vec<DefectType>,
    pub maintenance_actions: Vec<MaintenanceAction>,
    pub severity: Severity,
    pub safety_critical: bool,
    pub confidence: Confidence,
    /// First matched keyword of each detected defect type
    pub indicators: Vec<String>,
}

impl DefectClassification {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Fused result of all three classifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveClassification {
    pub ata: AtaClassification,
    pub ispec: ISpecClassification,
    pub defect: DefectClassification,
    pub overall_confidence: Confidence,
    pub processing_notes: Vec<String>,
}

impl ComprehensiveClassification {
    /// Sentinel result with no notes
    pub fn empty() -> Self {
        Self {
            ata: AtaClassification::empty(),
            ispec: ISpecClassification::empty(),
            defect: DefectClassification::empty(),
            overall_confidence: 0.0,
            processing_notes: Vec::new(),
        }
    }

    /// Sentinel result for blank input
    pub fn empty_input() -> Self {
        Self {
            processing_notes: vec![EMPTY_INPUT_NOTE.to_string()],
            ..Self::empty()
        }
    }

    /// Sentinel result for a call that failed internally
    ///
    /// Partial sub-results are never carried over.
    pub fn degraded(reason: impl std::fmt::Display) -> Self {
        Self {
            processing_notes: vec![format!("{}: {}", DEGRADED_NOTE_PREFIX, reason)],
            ..Self::empty()
        }
    }

    /// Whether this is a degraded result
    pub fn is_degraded(&self) -> bool {
        self.processing_notes
            .iter()
            .any(|n| n.starts_with(DEGRADED_NOTE_PREFIX))
    }

    /// Copy for the API boundary (overall confidence rounded to 3 decimals)
    pub fn to_api(&self) -> Self {
        Self {
            overall_confidence: round3(self.overall_confidence),
            ..self.clone()
        }
    }
}

impl Default for ComprehensiveClassification {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_confidence() {
        assert_eq!(clamp_confidence(1.7), 1.0);
        assert_eq!(clamp_confidence(-0.2), 0.0);
        assert_eq!(clamp_confidence(f64::NAN), 0.0);
        assert_eq!(clamp_confidence(0.45), 0.45);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.48999999999999994), 0.49);
        assert_eq!(round3(0.12345), 0.123);
        assert_eq!(round3(1.0), 1.0);
    }

    #[test]
    fn test_empty_input_shape() {
        let result = ComprehensiveClassification::empty_input();
        assert_eq!(result.ata.chapter, "00");
        assert_eq!(result.ata.chapter_name, "Unknown");
        assert!(result.ispec.part_categories.is_empty());
        assert_eq!(result.defect.severity, Severity::Minor);
        assert_eq!(result.processing_notes, vec![EMPTY_INPUT_NOTE.to_string()]);
        assert!(!result.is_degraded());
    }

    #[test]
    fn test_degraded_note() {
        let result = ComprehensiveClassification::degraded("boom");
        assert_eq!(
            result.processing_notes,
            vec!["Classification processing error: boom".to_string()]
        );
        assert!(result.is_degraded());
        assert_eq!(result.overall_confidence, 0.0);
    }

    #[test]
    fn test_output_contract_field_names() {
        let mut result = ComprehensiveClassification::empty();
        result.ispec.part_categories.push(PartCategory::SealsGaskets);
        result.defect.defect_types.push(DefectType::Corrosion);
        result.defect.maintenance_actions.push(MaintenanceAction::Treat);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["ata"]["chapter"], "00");
        assert_eq!(json["ispec"]["part_categories"][0], "seals_gaskets");
        assert_eq!(json["defect"]["defect_types"][0], "corrosion");
        assert_eq!(json["defect"]["maintenance_actions"][0], "treat");
        assert_eq!(json["defect"]["severity"], "minor");
        assert_eq!(json["defect"]["safety_critical"], false);
        assert!(json["overall_confidence"].is_number());
        assert!(json["processing_notes"].is_array());
    }

    #[test]
    fn test_to_api_rounds_overall_only() {
        let mut result = ComprehensiveClassification::empty();
        result.overall_confidence = 0.65432;
        result.ata.confidence = 0.12345;

        let api = result.to_api();
        assert_eq!(api.overall_confidence, 0.654);
        assert_eq!(api.ata.confidence, 0.12345);
    }
}

//! Flattened summary projection for lightweight consumers

use super::classification::{round3, ComprehensiveClassification, Confidence};
use crate::taxonomy::{DefectType, MaintenanceAction, PartCategory, Severity};
use serde::{Deserialize, Serialize};

/// Summary of a [`ComprehensiveClassification`], derived without recomputation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub ata_chapter: String,
    pub ata_chapter_name: String,
    pub defect_types: Vec<DefectType>,
    pub maintenance_actions: Vec<MaintenanceAction>,
    pub identified_parts: Vec<String>,
    pub part_categories: Vec<PartCategory>,
    pub severity: Severity,
    pub safety_critical: bool,
    pub overall_confidence: Confidence,
    pub processing_notes: Vec<String>,
}

impl From<&ComprehensiveClassification> for ClassificationSummary {
    fn from(c: &ComprehensiveClassification) -> Self {
        Self {
            ata_chapter: c.ata.chapter.clone(),
            ata_chapter_name: c.ata.chapter_name.clone(),
            defect_types: c.defect.defect_types.clone(),
            maintenance_actions: c.defect.maintenance_actions.clone(),
            identified_parts: c.ispec.identified_parts.clone(),
            part_categories: c.ispec.part_categories.clone(),
            severity: c.defect.severity,
            safety_critical: c.defect.safety_critical,
            overall_confidence: round3(c.overall_confidence),
            processing_notes: c.processing_notes.clone(),
        }
    }
}

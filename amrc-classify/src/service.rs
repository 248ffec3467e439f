//! Classifier service - orchestration of the three report classifiers
//!
//! `classify_report` is the single boundary where internal failures become a
//! degraded result. Everything beneath it returns `Result`; a panic inside a
//! classifier is caught at the boundary and treated like an error.
//!
//! # Flow
//!
//! 1. Blank text → empty result with an explanatory note
//! 2. ATA, iSpec and Defect classifiers run independently
//! 3. Each sub-result is validated (confidence range, chapter table)
//! 4. Overall confidence fused from the three sub-confidences
//! 5. Cross-validation notes, then metadata notes

use crate::classifiers::{AtaClassifier, DefectTypeClassifier, ISpecClassifier, ReportClassifier};
use crate::error::{ClassificationError, ClassificationResult};
use crate::fusion::{self, FusionWeights};
use crate::models::{
    AtaClassification, ClassificationSummary, ComprehensiveClassification, DefectClassification,
    ISpecClassification, ReportMetadata,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, error, info};

/// Probe report used by the health self-test
pub const HEALTH_PROBE_TEXT: &str = "Found corrosion on wing structure";

/// Orchestrates ATA, iSpec and Defect classification
///
/// Holds only immutable classifier state, so one instance can be shared
/// (`Arc<ClassifierService>`) across any number of concurrent callers.
pub struct ClassifierService {
    ata: Box<dyn ReportClassifier<Output = AtaClassification>>,
    ispec: Box<dyn ReportClassifier<Output = ISpecClassification>>,
    defect: Box<dyn ReportClassifier<Output = DefectClassification>>,
    weights: FusionWeights,
}

impl ClassifierService {
    /// Create service with the built-in classifiers
    ///
    /// Fails if any taxonomy pattern does not compile.
    pub fn new() -> ClassificationResult<Self> {
        let service = Self::build().map_err(|e| {
            error!(error = %e, "Failed to initialize classifiers");
            e
        })?;

        info!("All classifiers initialized successfully");
        Ok(service)
    }

    fn build() -> ClassificationResult<Self> {
        Ok(Self::with_classifiers(
            Box::new(AtaClassifier::new()?),
            Box::new(ISpecClassifier::new()?),
            Box::new(DefectTypeClassifier::new()?),
        ))
    }

    /// Create service from explicit classifier instances
    pub fn with_classifiers(
        ata: Box<dyn ReportClassifier<Output = AtaClassification>>,
        ispec: Box<dyn ReportClassifier<Output = ISpecClassification>>,
        defect: Box<dyn ReportClassifier<Output = DefectClassification>>,
    ) -> Self {
        Self {
            ata,
            ispec,
            defect,
            weights: FusionWeights::default(),
        }
    }

    /// Classify one report
    ///
    /// Never fails: an internal error is logged and replaced by the empty
    /// classification carrying a processing-error note. Partial sub-results
    /// are discarded.
    pub fn classify_report(
        &self,
        text: &str,
        metadata: Option<&ReportMetadata>,
    ) -> ComprehensiveClassification {
        match contain_panic(|| self.try_classify(text, metadata)) {
            Ok(classification) => classification,
            Err(e) => {
                error!(error = %e, "Classification failed, returning degraded result");
                ComprehensiveClassification::degraded(e)
            }
        }
    }

    /// Classify one report, surfacing internal failures
    pub fn try_classify(
        &self,
        text: &str,
        metadata: Option<&ReportMetadata>,
    ) -> ClassificationResult<ComprehensiveClassification> {
        if text.trim().is_empty() {
            debug!("Blank report text");
            return Ok(ComprehensiveClassification::empty_input());
        }

        let ata = self.ata.classify_text(text)?;
        fusion::validate_ata(&ata)?;
        debug!(
            source = self.ata.source_id(),
            chapter = %ata.chapter,
            chapter_name = %ata.chapter_name,
            "ATA classification"
        );

        let ispec = self.ispec.classify_text(text)?;
        fusion::validate_ispec(&ispec)?;
        debug!(
            source = self.ispec.source_id(),
            parts = ispec.identified_parts.len(),
            "iSpec classification"
        );

        let defect = self.defect.classify_text(text)?;
        fusion::validate_defect(&defect)?;
        debug!(
            source = self.defect.source_id(),
            defect_types = ?defect.defect_types,
            "Defect classification"
        );

        let overall_confidence = fusion::fuse_confidence(&ata, &ispec, &defect, self.weights);

        let mut processing_notes = fusion::cross_validate(&ata, &ispec, &defect);
        for note in &processing_notes {
            debug!(note = %note, "Cross-validation");
        }

        if let Some(metadata) = metadata {
            processing_notes.extend(fusion::enrich(metadata, &ispec));
        }

        Ok(ComprehensiveClassification {
            ata,
            ispec,
            defect,
            overall_confidence,
            processing_notes,
        })
    }

    /// Flattened summary of a classification
    pub fn summary(&self, classification: &ComprehensiveClassification) -> ClassificationSummary {
        ClassificationSummary::from(classification)
    }

    /// Run every classifier on a fixed probe report
    pub fn health_status(&self) -> HealthStatus {
        match contain_panic(|| self.probe()) {
            Ok(test_results) => HealthStatus {
                status: HealthState::Healthy,
                ata_classifier: ClassifierState::Operational,
                ispec_classifier: ClassifierState::Operational,
                defect_classifier: ClassifierState::Operational,
                test_results: Some(test_results),
                error: None,
            },
            Err(e) => {
                error!(error = %e, "Health probe failed");
                HealthStatus {
                    status: HealthState::Unhealthy,
                    ata_classifier: ClassifierState::Unknown,
                    ispec_classifier: ClassifierState::Unknown,
                    defect_classifier: ClassifierState::Unknown,
                    test_results: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn probe(&self) -> ClassificationResult<HealthProbe> {
        let ata = self.ata.classify_text(HEALTH_PROBE_TEXT)?;
        let ispec = self.ispec.classify_text(HEALTH_PROBE_TEXT)?;
        let defect = self.defect.classify_text(HEALTH_PROBE_TEXT)?;

        Ok(HealthProbe {
            ata_chapter: ata.chapter,
            parts_identified: ispec.identified_parts.len(),
            defects_found: defect.defect_types.len(),
        })
    }
}

/// Run `f`, turning a panic into a classifier error
///
/// Classifiers hold no mutable state, so nothing is left half-updated after
/// an unwind.
fn contain_panic<T>(
    f: impl FnOnce() -> ClassificationResult<T>,
) -> ClassificationResult<T> {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(ClassificationError::Classifier {
            source_id: "service",
            message: format!("classifier panicked: {}", panic_message(payload.as_ref())),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

/// Overall service health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

/// Per-classifier health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierState {
    Operational,
    Unknown,
}

/// Probe results from the health self-test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthProbe {
    pub ata_chapter: String,
    pub parts_identified: usize,
    pub defects_found: usize,
}

/// Health self-test report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,
    pub ata_classifier: ClassifierState,
    pub ispec_classifier: ClassifierState,
    pub defect_classifier: ClassifierState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_results: Option<HealthProbe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

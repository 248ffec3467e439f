// Report Classifiers - Independent Rule-Based Sources
//
// Three classifiers run independently over the same report text; none reads
// another's output. The orchestrator fuses their results.

use crate::error::ClassificationResult;

pub mod ata_classifier;
pub mod defect_classifier;
pub mod ispec_classifier;

pub use ata_classifier::AtaClassifier;
pub use defect_classifier::DefectTypeClassifier;
pub use ispec_classifier::ISpecClassifier;

/// Classifier trait - every report classifier implements this
///
/// Implementations hold only immutable state (compiled patterns) so a single
/// instance can be shared across threads without locking.
pub trait ReportClassifier: Send + Sync {
    /// Result type produced for one report
    type Output;

    /// Classifier identifier (e.g., "ATA", "iSpec", "Defect")
    fn source_id(&self) -> &'static str;

    /// Classify one report
    ///
    /// # Returns
    /// * `Ok(Output)` - Classification (blank text yields the empty result)
    /// * `Err(_)` - Internal failure; the orchestrator degrades the whole call
    fn classify_text(&self, text: &str) -> ClassificationResult<Self::Output>;
}

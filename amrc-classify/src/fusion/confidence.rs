// Confidence Fusion - Weighted Combination of Classifier Confidences

use crate::models::classification::clamp_confidence;
use crate::models::{AtaClassification, Confidence, DefectClassification, ISpecClassification};

/// Per-classifier weights for overall confidence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionWeights {
    pub ata: f64,
    pub ispec: f64,
    pub defect: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            ata: 0.4,
            ispec: 0.3,
            defect: 0.3,
        }
    }
}

/// Overall confidence: weighted sum of the three sub-confidences, capped at 1.0
///
/// # Arguments
/// * `ata` - ATA chapter result
/// * `ispec` - iSpec part result
/// * `defect` - Defect profile result
/// * `weights` - Per-source weights
pub fn fuse_confidence(
    ata: &AtaClassification,
    ispec: &ISpecClassification,
    defect: &DefectClassification,
    weights: FusionWeights,
) -> Confidence {
    let overall = weights.ata * ata.confidence
        + weights.ispec * ispec.confidence
        + weights.defect * defect.confidence;
    clamp_confidence(overall.min(1.0))
}

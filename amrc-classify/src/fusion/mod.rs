// Fusion Layer - Combine Independent Classifier Results
//
// Confidence fusion, cross-validation and metadata enrichment. Nothing here
// modifies a sub-result; fusion produces the overall score and the notes.

pub mod confidence;
pub mod consistency;
pub mod metadata;

pub use confidence::{fuse_confidence, FusionWeights};
pub use consistency::{cross_validate, validate_ata, validate_defect, validate_ispec};
pub use metadata::enrich;

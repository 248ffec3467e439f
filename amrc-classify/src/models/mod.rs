//! Data models for classification inputs and results

pub mod classification;
pub mod report;
pub mod summary;

pub use classification::{
    AtaClassification, ComprehensiveClassification, Confidence, DefectClassification,
    ISpecClassification,
};
pub use report::ReportMetadata;
pub use summary::ClassificationSummary;

//! # Aircraft Maintenance Report Classifier (amrc-classify)
//!
//! Deterministic, rule-based classification of free-text aircraft
//! maintenance reports.
//!
//! **Purpose:** Assign each report an ATA Spec 100 chapter, iSpec 2200 parts
//! and part numbers, and a defect/maintenance-action/severity profile, then
//! fuse them into one confidence-scored result with consistency notes.
//!
//! **Architecture:** Three independent classifiers (taxonomy tables + compiled
//! patterns) feeding a fusion layer, orchestrated by [`ClassifierService`].

pub mod batch;
pub mod classifiers;
pub mod error;
pub mod fusion;
pub mod models;
pub mod service;
pub mod taxonomy;

pub use error::{ClassificationError, ClassificationResult};
pub use models::{ClassificationSummary, ComprehensiveClassification, ReportMetadata};
pub use service::ClassifierService;

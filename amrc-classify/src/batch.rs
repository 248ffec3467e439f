//! Batch classification
//!
//! Classifies a list of reports through one shared service on blocking
//! worker tasks. Output order always matches input order, and a worker that
//! dies produces a degraded classification for its report instead of
//! aborting the batch.

use crate::error::{ClassificationError, ClassificationResult};
use crate::models::{ComprehensiveClassification, ReportMetadata};
use crate::service::ClassifierService;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info};
use uuid::Uuid;

/// One input report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    #[serde(default)]
    pub id: Option<String>,
    pub report_text: String,
    #[serde(flatten)]
    pub metadata: ReportMetadata,
}

impl BatchReport {
    pub fn new(report_text: impl Into<String>) -> Self {
        Self {
            id: None,
            report_text: report_text.into(),
            metadata: ReportMetadata::default(),
        }
    }
}

/// One classified report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub id: String,
    pub classified_at: DateTime<Utc>,
    pub classification: ComprehensiveClassification,
}

/// Load a JSON array of reports
pub fn load_reports(path: &Path) -> ClassificationResult<Vec<BatchReport>> {
    let content = std::fs::read_to_string(path).map_err(amrc_common::Error::from)?;
    let reports: Vec<BatchReport> =
        serde_json::from_str(&content).map_err(amrc_common::Error::from)?;
    info!(count = reports.len(), path = %path.display(), "Loaded batch reports");
    Ok(reports)
}

/// Classify every report, at most `max_concurrency` at a time
///
/// # Arguments
/// * `service` - Shared classifier service
/// * `reports` - Reports in output order
/// * `max_concurrency` - Worker limit (values below 1 are treated as 1)
pub async fn classify_batch(
    service: Arc<ClassifierService>,
    reports: Vec<BatchReport>,
    max_concurrency: usize,
) -> Vec<BatchRecord> {
    let total = reports.len();
    info!(total, max_concurrency, "Batch classification started");

    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));
    let mut ids = Vec::with_capacity(total);
    let mut join_set = JoinSet::new();

    for (index, report) in reports.into_iter().enumerate() {
        ids.push(report.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()));

        let service = Arc::clone(&service);
        let semaphore = Arc::clone(&semaphore);
        join_set.spawn(async move {
            // Closed semaphore only happens on shutdown; classify regardless
            let _permit = semaphore.acquire_owned().await.ok();

            let BatchReport {
                report_text,
                metadata,
                ..
            } = report;
            let worker = tokio::task::spawn_blocking(move || {
                let metadata = (!metadata.is_empty()).then_some(metadata);
                service.classify_report(&report_text, metadata.as_ref())
            })
            .await;

            let classification = worker.unwrap_or_else(|e| {
                error!(index, error = %e, "Batch worker failed");
                ComprehensiveClassification::degraded(worker_failure(e))
            });
            (index, classification, Utc::now())
        });
    }

    let mut slots: Vec<Option<(ComprehensiveClassification, DateTime<Utc>)>> =
        (0..total).map(|_| None).collect();
    let mut completed = 0usize;

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, classification, classified_at)) => {
                slots[index] = Some((classification, classified_at));
                completed += 1;
                if completed % 100 == 0 {
                    info!(completed, total, "Batch progress");
                }
            }
            Err(e) => error!(error = %e, "Batch task failed"),
        }
    }

    let records: Vec<BatchRecord> = ids
        .into_iter()
        .zip(slots)
        .map(|(id, slot)| {
            let (classification, classified_at) = slot.unwrap_or_else(|| {
                (
                    ComprehensiveClassification::degraded("batch task did not complete"),
                    Utc::now(),
                )
            });
            BatchRecord {
                id,
                classified_at,
                classification,
            }
        })
        .collect();

    let degraded = records
        .iter()
        .filter(|r| r.classification.is_degraded())
        .count();
    info!(total, degraded, "Batch classification complete");

    records
}

fn worker_failure(e: tokio::task::JoinError) -> ClassificationError {
    ClassificationError::Classifier {
        source_id: "batch",
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserializes_with_extra_keys() {
        let json = r#"{
            "id": "test_001",
            "report_text": "installed new bonding strap.",
            "aircraft_type": "Boeing 737-800",
            "expected_classification": {"ata_chapter": "24"}
        }"#;
        let report: BatchReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.id.as_deref(), Some("test_001"));
        assert_eq!(report.metadata.aircraft_type.as_deref(), Some("Boeing 737-800"));
        assert_eq!(report.metadata.report_date, None);
    }

    #[test]
    fn test_report_requires_text() {
        let result: Result<BatchReport, _> = serde_json::from_str(r#"{"id": "x"}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let service = Arc::new(ClassifierService::new().unwrap());
        assert!(classify_batch(service, Vec::new(), 4).await.is_empty());
    }
}

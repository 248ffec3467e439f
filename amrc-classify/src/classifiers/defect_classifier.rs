// Defect Type Classifier - Defects, Maintenance Actions, Severity
//
// Severity is a max-fold over every severity indicator of every detected
// defect type, then raised to at least Major by any limit exceedance.
// Confidence: 0.3 per defect type + 0.2 per action + 0.3 when both are found

use super::ReportClassifier;
use crate::error::ClassificationResult;
use crate::models::classification::clamp_confidence;
use crate::models::DefectClassification;
use crate::taxonomy::defects::{EXCEEDANCE_FLOOR, LIMIT_PATTERNS, SAFETY_CRITICAL_INDICATORS};
use crate::taxonomy::patterns::compile;
use crate::taxonomy::{DefectType, LimitKind, MaintenanceAction, Severity};
use regex::Regex;
use tracing::debug;

const DEFECT_WEIGHT: f64 = 0.3;
const ACTION_WEIGHT: f64 = 0.2;
const COMBINED_BONUS: f64 = 0.3;

/// Defect type and maintenance action classifier
#[derive(Debug, Clone)]
pub struct DefectTypeClassifier {
    limit_patterns: Vec<(LimitKind, Regex)>,
}

impl DefectTypeClassifier {
    /// Create classifier, compiling the limit-reference patterns
    pub fn new() -> ClassificationResult<Self> {
        let limit_patterns = LIMIT_PATTERNS
            .iter()
            .map(|(kind, pattern)| Ok((*kind, compile("limit reference", pattern)?)))
            .collect::<ClassificationResult<Vec<_>>>()?;

        Ok(Self { limit_patterns })
    }

    /// Classify defects, actions, severity and safety-criticality
    pub fn classify(&self, text: &str) -> DefectClassification {
        if text.trim().is_empty() {
            return DefectClassification::empty();
        }

        let text_lower = text.to_lowercase();

        let (defect_types, indicators) = identify_defect_types(&text_lower);
        let maintenance_actions = identify_actions(&text_lower);
        let severity = self.resolve_severity(&text_lower, &defect_types);
        let safety_critical = SAFETY_CRITICAL_INDICATORS
            .iter()
            .any(|indicator| text_lower.contains(indicator));

        let mut score = DEFECT_WEIGHT * defect_types.len() as f64
            + ACTION_WEIGHT * maintenance_actions.len() as f64;
        if !defect_types.is_empty() && !maintenance_actions.is_empty() {
            score += COMBINED_BONUS;
        }
        let confidence = clamp_confidence(score.min(1.0));

        debug!(
            defects = defect_types.len(),
            actions = maintenance_actions.len(),
            severity = %severity,
            safety_critical,
            confidence,
            "Defect profile classified"
        );

        DefectClassification {
            defect_types,
            maintenance_actions,
            severity,
            safety_critical,
            confidence,
            indicators,
        }
    }

    fn resolve_severity(&self, text_lower: &str, defect_types: &[DefectType]) -> Severity {
        let mut severity = defect_types
            .iter()
            .flat_map(|defect| defect.severity_indicators().buckets())
            .filter(|(_, bucket)| bucket.iter().any(|i| text_lower.contains(i)))
            .map(|(level, _)| level)
            .fold(Severity::Minor, Severity::max);

        let matched = |wanted: LimitKind| {
            self.limit_patterns
                .iter()
                .any(|(kind, regex)| *kind == wanted && regex.is_match(text_lower))
        };

        if matched(LimitKind::Exceeded) {
            severity = severity.max(EXCEEDANCE_FLOOR);
        } else if matched(LimitKind::Within) {
            // Within limits never changes severity
            debug!(severity = %severity, "Defect reported within limits");
        }

        severity
    }

    /// Full profile of a defect type by wire name
    pub fn defect_profile(name: &str) -> Option<DefectType> {
        DefectType::from_name(name)
    }

    /// All defect types in detection order
    pub fn list_defect_types() -> &'static [DefectType] {
        &DefectType::ALL
    }

    /// All maintenance actions in detection order
    pub fn list_maintenance_actions() -> &'static [MaintenanceAction] {
        &MaintenanceAction::ALL
    }
}

/// Each defect type is added once, recording its first matching keyword
fn identify_defect_types(text_lower: &str) -> (Vec<DefectType>, Vec<String>) {
    let mut defect_types = Vec::new();
    let mut indicators = Vec::new();

    for defect in DefectType::ALL {
        if let Some(keyword) = defect.keywords().iter().find(|k| text_lower.contains(*k)) {
            defect_types.push(defect);
            indicators.push(keyword.to_string());
        }
    }

    (defect_types, indicators)
}

fn identify_actions(text_lower: &str) -> Vec<MaintenanceAction> {
    MaintenanceAction::ALL
        .iter()
        .copied()
        .filter(|action| action.keywords().iter().any(|k| text_lower.contains(k)))
        .collect()
}

impl ReportClassifier for DefectTypeClassifier {
    type Output = DefectClassification;

    fn source_id(&self) -> &'static str {
        "Defect"
    }

    fn classify_text(&self, text: &str) -> ClassificationResult<DefectClassification> {
        Ok(self.classify(text))
    }
}

// iSpec Classifier - iSpec 2200 Part Identification
//
// Detects part categories, named aircraft parts and part numbers.
// Confidence: 0.1 per category + 0.2 per part + 0.3 per part number, capped at 1.0

use super::ReportClassifier;
use crate::error::ClassificationResult;
use crate::models::classification::clamp_confidence;
use crate::models::ISpecClassification;
use crate::taxonomy::parts::{PART_NUMBER_PATTERNS, PART_RULES, TOOLS_EQUIPMENT};
use crate::taxonomy::patterns::compile_set;
use crate::taxonomy::{push_unique, PartCategory, PartGroup};
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

const CATEGORY_WEIGHT: f64 = 0.1;
const PART_WEIGHT: f64 = 0.2;
const PART_NUMBER_WEIGHT: f64 = 0.3;

/// iSpec 2200 part classifier
#[derive(Debug, Clone)]
pub struct ISpecClassifier {
    part_number_patterns: Vec<Regex>,
}

impl ISpecClassifier {
    /// Create classifier, compiling the part-number patterns
    pub fn new() -> ClassificationResult<Self> {
        Ok(Self {
            part_number_patterns: compile_set("part number", PART_NUMBER_PATTERNS)?,
        })
    }

    /// Identify parts, part categories and part numbers in report text
    pub fn classify(&self, text: &str) -> ISpecClassification {
        if text.trim().is_empty() {
            return ISpecClassification::empty();
        }

        let text_lower = text.to_lowercase();

        let part_categories = identify_categories(&text_lower);
        let identified_parts = identify_parts(&text_lower);
        // Original case: part numbers are reported as written
        let part_numbers = self.extract_part_numbers(text);

        let score = CATEGORY_WEIGHT * part_categories.len() as f64
            + PART_WEIGHT * identified_parts.len() as f64
            + PART_NUMBER_WEIGHT * part_numbers.len() as f64;
        let confidence = clamp_confidence(score.min(1.0));

        debug!(
            categories = part_categories.len(),
            parts = identified_parts.len(),
            part_numbers = part_numbers.len(),
            confidence,
            "iSpec parts identified"
        );

        ISpecClassification {
            part_categories,
            identified_parts,
            confidence,
            part_numbers,
        }
    }

    /// Run every part-number pattern, concatenating matches in pattern order
    /// and dropping repeats
    fn extract_part_numbers(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut part_numbers = Vec::new();
        for regex in &self.part_number_patterns {
            for m in regex.find_iter(text) {
                if seen.insert(m.as_str()) {
                    part_numbers.push(m.as_str().to_string());
                }
            }
        }
        part_numbers
    }

    /// Description of a part category by wire name
    pub fn category_description(name: &str) -> Option<&'static str> {
        PartCategory::from_name(name).map(|c| c.description())
    }

    /// All categories as (name, description) in declaration order
    pub fn list_categories() -> Vec<(&'static str, &'static str)> {
        PartCategory::ALL
            .iter()
            .map(|c| (c.as_str(), c.description()))
            .collect()
    }
}

/// Category inclusion is boolean: first keyword hit adds it
fn identify_categories(text_lower: &str) -> Vec<PartCategory> {
    PartCategory::ALL
        .iter()
        .copied()
        .filter(|category| category.keywords().iter().any(|k| text_lower.contains(k)))
        .collect()
}

fn identify_parts(text_lower: &str) -> Vec<String> {
    let mut parts: Vec<&'static str> = Vec::new();

    for group in PartGroup::ALL {
        for part in group.parts() {
            if text_lower.contains(part) {
                push_unique(&mut parts, *part);
            }
        }
    }

    for rule in PART_RULES {
        if rule.matches(text_lower) {
            push_unique(&mut parts, rule.part);
        }
    }

    parts
        .into_iter()
        .filter(|part| !TOOLS_EQUIPMENT.contains(part))
        .map(str::to_string)
        .collect()
}

impl ReportClassifier for ISpecClassifier {
    type Output = ISpecClassification;

    fn source_id(&self) -> &'static str {
        "iSpec"
    }

    fn classify_text(&self, text: &str) -> ClassificationResult<ISpecClassification> {
        Ok(self.classify(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ISpecClassifier {
        ISpecClassifier::new().unwrap()
    }

    #[test]
    fn test_repeated_part_numbers_collapse() {
        let text = (0..5000)
            .map(|i| format!("MS{} NAS1149", 20000 + i % 50))
            .collect::<Vec<_>>()
            .join(" ");
        let result = classifier().classify(&text);
        assert_eq!(result.part_numbers.len(), 51);
        assert_eq!(result.part_numbers[0], "MS20000");
        assert!(result.part_numbers.contains(&"NAS1149".to_string()));
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_blank_input_is_empty() {
        let result = classifier().classify("  ");
        assert_eq!(result, ISpecClassification::empty());
    }

    #[test]
    fn test_hydraulic_actuator_context() {
        let result = classifier().classify(
            "Found hydraulic leak at nose gear actuator. B-nut connection showing signs of corrosion. Replaced seal and torqued to specification.",
        );
        assert_eq!(
            result.part_categories,
            vec![
                PartCategory::Fasteners,
                PartCategory::SealsGaskets,
                PartCategory::Hydraulic,
                PartCategory::Mechanical,
            ]
        );
        assert_eq!(result.identified_parts, vec!["actuator", "hydraulic actuator"]);
        assert!(result.part_numbers.is_empty());
        assert!((result.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_boost_pump_and_manual_reference() {
        let result = classifier().classify(
            "removed and replaced bonding strap clips on r/h tank aft boost pump iaw m.m.28-22-41-4.",
        );
        assert_eq!(
            result.identified_parts,
            vec!["pump", "tank", "bonding strap", "boost pump"]
        );
        assert_eq!(
            result.part_categories,
            vec![PartCategory::Fasteners, PartCategory::Hydraulic]
        );
        assert_eq!(result.part_numbers, vec!["m.m.28-22-41-4"]);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_spoiler_parts() {
        let result = classifier().classify(
            "cleaned area and tightened all 'b' nuts above #8 spoiler actuator/quadrant; operated #8 spoiler panel several times, no leaks noted.",
        );
        assert_eq!(
            result.identified_parts,
            vec!["actuator", "spoiler", "spoiler panel", "spoiler actuator"]
        );
    }

    #[test]
    fn test_part_numbers_deduplicated_across_patterns() {
        let result = classifier().classify("Replaced washer MS20470 and MS20470 rivet.");
        // general and MS patterns both match the same literal
        assert_eq!(result.part_numbers, vec!["MS20470"]);
    }

    #[test]
    fn test_standard_part_numbers_keep_case() {
        let c = classifier();
        let result = c.classify("Installed NAS1149 washer and AN960 nut.");
        assert_eq!(result.part_numbers, vec!["NAS1149", "AN960"]);

        let result = c.classify("Replaced bracket p/n 123456-01.");
        assert_eq!(result.part_numbers, vec!["123456-01"]);
    }

    #[test]
    fn test_tools_not_reported_as_parts() {
        let parts = identify_parts("torque wrench applied to wheel");
        assert_eq!(parts, vec!["wheel"]);
        assert!(!parts.iter().any(|p| TOOLS_EQUIPMENT.contains(&p.as_str())));
    }

    #[test]
    fn test_category_lookups() {
        assert_eq!(
            ISpecClassifier::category_description("fasteners"),
            Some("Fastening hardware and connecting elements")
        );
        assert_eq!(ISpecClassifier::category_description("avionics"), None);

        let categories = ISpecClassifier::list_categories();
        assert_eq!(categories.len(), 9);
        assert_eq!(categories[0].0, "structure");
        assert_eq!(categories[8].0, "consumables");
    }
}

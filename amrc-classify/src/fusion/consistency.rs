// Consistency Checks - Sub-Result Validation and Cross-Validation Notes
//
// validate_* reject results that break a result invariant (the orchestrator
// degrades the call). cross_validate only annotates; it never alters results.

use crate::error::{ClassificationError, ClassificationResult};
use crate::models::{AtaClassification, DefectClassification, ISpecClassification};
use crate::taxonomy::{AtaChapter, DefectType, PartCategory, UNKNOWN_CHAPTER_CODE};

/// Chapters whose safety-critical findings are expected
const CRITICAL_SYSTEM_CHAPTERS: [&str; 3] = ["27", "32", "72"];

fn check_confidence(source: &str, confidence: f64) -> ClassificationResult<()> {
    if confidence.is_finite() && (0.0..=1.0).contains(&confidence) {
        Ok(())
    } else {
        Err(ClassificationError::InvalidResult(format!(
            "{} confidence out of range: {}",
            source, confidence
        )))
    }
}

/// Check an ATA result: confidence in [0, 1] and a known (or sentinel) chapter
pub fn validate_ata(ata: &AtaClassification) -> ClassificationResult<()> {
    check_confidence("ATA", ata.confidence)?;
    if ata.chapter != UNKNOWN_CHAPTER_CODE && AtaChapter::from_code(&ata.chapter).is_none() {
        return Err(ClassificationError::InvalidResult(format!(
            "ATA chapter not in table: {}",
            ata.chapter
        )));
    }
    Ok(())
}

pub fn validate_ispec(ispec: &ISpecClassification) -> ClassificationResult<()> {
    check_confidence("iSpec", ispec.confidence)
}

pub fn validate_defect(defect: &DefectClassification) -> ClassificationResult<()> {
    check_confidence("Defect", defect.confidence)
}

/// Cross-validate the three results, returning notes in rule order
pub fn cross_validate(
    ata: &AtaClassification,
    ispec: &ISpecClassification,
    defect: &DefectClassification,
) -> Vec<String> {
    let mut notes = Vec::new();

    match ata.chapter.as_str() {
        "32" if !ispec.has_part_containing("landing gear") => {
            if ispec.has_part_containing("gear") {
                notes.push("ATA 32 (Landing Gear) consistent with gear-related parts".to_string());
            } else {
                notes.push("ATA 32 classification but no landing gear parts identified".to_string());
            }
        }
        "27" if ispec.has_part_containing("spoiler") => {
            notes.push("ATA 27 (Flight Controls) consistent with spoiler parts".to_string());
        }
        "51" if defect
            .defect_types
            .iter()
            .any(|d| matches!(d, DefectType::Corrosion | DefectType::Crack)) =>
        {
            notes.push("ATA 51 (Structures) consistent with structural defect types".to_string());
        }
        "24" if ispec.part_categories.contains(&PartCategory::Electrical) => {
            notes.push("ATA 24 (Electrical) consistent with electrical parts".to_string());
        }
        _ => {}
    }

    if defect.safety_critical && CRITICAL_SYSTEM_CHAPTERS.contains(&ata.chapter.as_str()) {
        notes.push("Safety-critical defect in critical system is appropriately flagged".to_string());
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ata(chapter: &str) -> AtaClassification {
        AtaClassification {
            chapter: chapter.to_string(),
            chapter_name: AtaChapter::from_code(chapter)
                .map(|c| c.name().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            confidence: 0.5,
            matched_keywords: Vec::new(),
        }
    }

    fn parts(names: &[&str]) -> ISpecClassification {
        ISpecClassification {
            identified_parts: names.iter().map(|s| s.to_string()).collect(),
            ..ISpecClassification::empty()
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut bad = ata("32");
        bad.confidence = 1.5;
        assert!(validate_ata(&bad).is_err());

        bad.confidence = f64::NAN;
        assert!(validate_ata(&bad).is_err());

        let mut ispec = ISpecClassification::empty();
        ispec.confidence = -0.1;
        assert!(validate_ispec(&ispec).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_chapter() {
        assert!(validate_ata(&ata("99")).is_err());
        assert!(validate_ata(&AtaClassification::empty()).is_ok());
        assert!(validate_ata(&ata("51")).is_ok());
        assert!(validate_defect(&DefectClassification::empty()).is_ok());
    }

    #[test]
    fn test_gear_chapter_without_gear_parts() {
        let notes = cross_validate(&ata("32"), &parts(&["actuator"]), &DefectClassification::empty());
        assert_eq!(notes, vec!["ATA 32 classification but no landing gear parts identified"]);
    }

    #[test]
    fn test_gear_chapter_with_gear_parts() {
        let notes = cross_validate(&ata("32"), &parts(&["gear door"]), &DefectClassification::empty());
        assert_eq!(notes, vec!["ATA 32 (Landing Gear) consistent with gear-related parts"]);
    }

    #[test]
    fn test_gear_chapter_with_landing_gear_part_is_silent() {
        let notes = cross_validate(
            &ata("32"),
            &parts(&["landing gear strut"]),
            &DefectClassification::empty(),
        );
        assert!(notes.is_empty());
    }

    #[test]
    fn test_structures_and_electrical() {
        let defect = DefectClassification {
            defect_types: vec![DefectType::Crack],
            ..DefectClassification::empty()
        };
        let notes = cross_validate(&ata("51"), &ISpecClassification::empty(), &defect);
        assert_eq!(notes, vec!["ATA 51 (Structures) consistent with structural defect types"]);

        let ispec = ISpecClassification {
            part_categories: vec![PartCategory::Electrical],
            ..ISpecClassification::empty()
        };
        let notes = cross_validate(&ata("24"), &ispec, &DefectClassification::empty());
        assert_eq!(notes, vec!["ATA 24 (Electrical) consistent with electrical parts"]);
    }

    #[test]
    fn test_safety_critical_in_critical_system() {
        let defect = DefectClassification {
            safety_critical: true,
            ..DefectClassification::empty()
        };
        let notes = cross_validate(&ata("27"), &parts(&["spoiler"]), &defect);
        assert_eq!(
            notes,
            vec![
                "ATA 27 (Flight Controls) consistent with spoiler parts",
                "Safety-critical defect in critical system is appropriately flagged",
            ]
        );

        let notes = cross_validate(&ata("51"), &ISpecClassification::empty(), &defect);
        assert!(notes.is_empty());
    }
}

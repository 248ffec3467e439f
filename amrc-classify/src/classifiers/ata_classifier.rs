// ATA Classifier - ATA Spec 100 Chapter Scoring
//
// Score sources stack additively per chapter:
//   SRM citations   +2.0 to chapter 51 per matching pattern
//   keyword counts  substring occurrences of each chapter keyword
//   context rules   fixed bonuses (see taxonomy::ata::CONTEXT_RULES)
// The highest score wins; ties go to the chapter declared first in
// AtaChapter::SCORED.

use super::ReportClassifier;
use crate::error::ClassificationResult;
use crate::models::classification::clamp_confidence;
use crate::models::AtaClassification;
use crate::taxonomy::ata::{SRM_REFERENCE_BONUS, SRM_REFERENCE_LABEL};
use crate::taxonomy::patterns::{compile_set, SRM_PATTERNS};
use crate::taxonomy::{push_unique, AtaChapter, CONTEXT_RULES};
use regex::Regex;
use tracing::debug;

/// Score at which chapter confidence saturates
const CONFIDENCE_SCALE: f64 = 10.0;

/// Running score for one chapter
#[derive(Debug, Clone)]
struct ChapterTally {
    chapter: AtaChapter,
    score: f64,
    matched: Vec<&'static str>,
}

impl ChapterTally {
    fn credit(&mut self, points: f64, label: &'static str) {
        self.score += points;
        push_unique(&mut self.matched, label);
    }
}

/// ATA Spec 100 chapter classifier
#[derive(Debug, Clone)]
pub struct AtaClassifier {
    srm_patterns: Vec<Regex>,
}

impl AtaClassifier {
    /// Create classifier, compiling the SRM citation patterns
    pub fn new() -> ClassificationResult<Self> {
        Ok(Self {
            srm_patterns: compile_set("SRM reference", SRM_PATTERNS)?,
        })
    }

    /// Classify report text into an ATA chapter
    pub fn classify(&self, text: &str) -> AtaClassification {
        if text.trim().is_empty() {
            return AtaClassification::empty();
        }

        let text_lower = text.to_lowercase();
        let mut tallies: Vec<ChapterTally> = AtaChapter::SCORED
            .iter()
            .map(|&chapter| ChapterTally {
                chapter,
                score: 0.0,
                matched: Vec::new(),
            })
            .collect();

        // SRM citations
        let srm_hits = self
            .srm_patterns
            .iter()
            .filter(|regex| regex.is_match(&text_lower))
            .count();
        if srm_hits > 0 {
            if let Some(tally) = tally_for(&mut tallies, AtaChapter::Structures) {
                for _ in 0..srm_hits {
                    tally.credit(SRM_REFERENCE_BONUS, SRM_REFERENCE_LABEL);
                }
            }
        }

        // Keyword occurrence counts
        for tally in tallies.iter_mut() {
            for keyword in tally.chapter.keywords() {
                let count = text_lower.matches(keyword).count();
                if count > 0 {
                    tally.credit(count as f64, keyword);
                }
            }
        }

        // Contextual rules
        for rule in CONTEXT_RULES {
            if rule.matches(&text_lower) {
                if let Some(tally) = tally_for(&mut tallies, rule.chapter) {
                    tally.credit(rule.bonus, rule.label);
                }
            }
        }

        let best = tallies
            .into_iter()
            .filter(|t| t.score > 0.0)
            .fold(None::<ChapterTally>, |best, t| match best {
                Some(b) if b.score >= t.score => Some(b),
                _ => Some(t),
            });

        match best {
            Some(tally) => {
                let confidence = clamp_confidence((tally.score / CONFIDENCE_SCALE).min(1.0));
                debug!(
                    chapter = tally.chapter.code(),
                    score = tally.score,
                    confidence,
                    "ATA chapter selected"
                );
                AtaClassification {
                    chapter: tally.chapter.code().to_string(),
                    chapter_name: tally.chapter.name().to_string(),
                    confidence,
                    matched_keywords: tally.matched.iter().map(|s| s.to_string()).collect(),
                }
            }
            None => {
                debug!("No ATA chapter scored above zero");
                AtaClassification::empty()
            }
        }
    }

    /// Name of an ATA chapter, `None` for codes not in the table
    pub fn chapter_name(code: &str) -> Option<&'static str> {
        AtaChapter::from_code(code.trim()).map(|c| c.name())
    }

    /// All chapters as (code, name) in ascending code order
    pub fn list_chapters() -> Vec<(&'static str, &'static str)> {
        AtaChapter::ALL.iter().map(|c| (c.code(), c.name())).collect()
    }
}

fn tally_for(tallies: &mut [ChapterTally], chapter: AtaChapter) -> Option<&mut ChapterTally> {
    tallies.iter_mut().find(|t| t.chapter == chapter)
}

impl ReportClassifier for AtaClassifier {
    type Output = AtaClassification;

    fn source_id(&self) -> &'static str {
        "ATA"
    }

    fn classify_text(&self, text: &str) -> ClassificationResult<AtaClassification> {
        Ok(self.classify(text))
    }
}

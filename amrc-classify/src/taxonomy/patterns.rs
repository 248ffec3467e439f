// Regex compilation for taxonomy pattern sets
//
// All patterns are compiled once, at classifier construction, and held by the
// classifier. A compile failure is a construction error.

use crate::error::{ClassificationError, ClassificationResult};
use regex::{Regex, RegexBuilder};

/// SRM citations; each matching pattern credits the structures chapter
pub const SRM_PATTERNS: &[&str] = &[
    r"srm\s*(\d{2}-\d{2}-\d{2})",
    r"per\s+srm\s*(\d{2}-\d{2}-\d{2})",
    r"area\s+within\s+limits\s+per\s+srm\s*(\d{2}-\d{2}-\d{2})",
];

/// Compile one case-insensitive pattern
pub fn compile(name: &'static str, pattern: &str) -> ClassificationResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ClassificationError::Pattern { name, source })
}

/// Compile a pattern set, preserving order
pub fn compile_set(name: &'static str, patterns: &[&str]) -> ClassificationResult<Vec<Regex>> {
    patterns.iter().map(|p| compile(name, p)).collect()
}

// Taxonomy Tables
//
// Static, read-only classification data: ATA chapters, iSpec part categories,
// defect types, maintenance actions and the regex pattern sets. Declaration
// order of every table is significant and stable.

pub mod ata;
pub mod defects;
pub mod parts;
pub mod patterns;

pub use ata::{AtaChapter, ContextRule, CONTEXT_RULES, UNKNOWN_CHAPTER_CODE, UNKNOWN_CHAPTER_NAME};
pub use defects::{DefectType, LimitKind, MaintenanceAction, Severity, SeverityIndicators};
pub use parts::{PartCategory, PartGroup, PartRule};

/// Append `item` unless already present (first-seen order)
pub(crate) fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if !list.contains(&item) {
        list.push(item);
    }
}

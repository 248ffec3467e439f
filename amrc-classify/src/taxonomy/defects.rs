// Defect, Severity and Maintenance Action Tables

use serde::{Deserialize, Serialize};

/// Defect severity, totally ordered minor < moderate < major < critical
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Minor,
    Moderate,
    Major,
    Critical,
}

impl Severity {
    /// Every level in ascending order
    pub const ALL: [Severity; 4] = [
        Severity::Minor,
        Severity::Moderate,
        Severity::Major,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Major => "major",
            Severity::Critical => "critical",
        }
    }

    /// Numeric level (minor=1 … critical=4)
    pub fn level(&self) -> u8 {
        match self {
            Severity::Minor => 1,
            Severity::Moderate => 2,
            Severity::Major => 3,
            Severity::Critical => 4,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity-indicator keywords for one defect type, one bucket per level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityIndicators {
    pub minor: &'static [&'static str],
    pub moderate: &'static [&'static str],
    pub major: &'static [&'static str],
    pub critical: &'static [&'static str],
}

impl SeverityIndicators {
    /// Buckets paired with the severity they imply
    pub fn buckets(&self) -> [(Severity, &'static [&'static str]); 4] {
        [
            (Severity::Minor, self.minor),
            (Severity::Moderate, self.moderate),
            (Severity::Major, self.major),
            (Severity::Critical, self.critical),
        ]
    }
}

/// Defect type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectType {
    Corrosion,
    Crack,
    Wear,
    Damage,
    Leak,
    Loose,
    Contamination,
    Misalignment,
}

impl DefectType {
    /// Every defect type in detection order
    pub const ALL: [DefectType; 8] = [
        DefectType::Corrosion,
        DefectType::Crack,
        DefectType::Wear,
        DefectType::Damage,
        DefectType::Leak,
        DefectType::Loose,
        DefectType::Contamination,
        DefectType::Misalignment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DefectType::Corrosion => "corrosion",
            DefectType::Crack => "crack",
            DefectType::Wear => "wear",
            DefectType::Damage => "damage",
            DefectType::Leak => "leak",
            DefectType::Loose => "loose",
            DefectType::Contamination => "contamination",
            DefectType::Misalignment => "misalignment",
        }
    }

    /// Detection keywords; the first one found becomes the indicator
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            DefectType::Corrosion => &[
                "corrosion",
                "corroded",
                "rust",
                "oxidation",
                "pitting",
                "intergranular",
            ],
            DefectType::Crack => &["crack", "cracked", "fissure", "fracture", "split"],
            DefectType::Wear => &["wear", "worn", "erosion", "abrasion", "chafing", "fretting"],
            DefectType::Damage => &["damage", "damaged", "dent", "gouge", "scratch", "impact"],
            DefectType::Leak => &["leak", "leaking", "seepage", "weeping", "dripping"],
            DefectType::Loose => &["loose", "looseness", "play", "movement", "slack"],
            DefectType::Contamination => &[
                "contamination",
                "contaminated",
                "dirty",
                "debris",
                "foreign object",
            ],
            DefectType::Misalignment => &[
                "misaligned",
                "misalignment",
                "out of rig",
                "binding",
                "interference",
            ],
        }
    }

    pub fn severity_indicators(&self) -> SeverityIndicators {
        match self {
            DefectType::Corrosion => SeverityIndicators {
                minor: &["light", "surface", "minor", "within limits"],
                moderate: &["moderate", "treated", "cleaned"],
                major: &["heavy", "extensive", "deep", "structural"],
                critical: &["severe", "through", "critical", "immediate"],
            },
            DefectType::Crack => SeverityIndicators {
                minor: &["hairline", "surface", "minor", "small"],
                moderate: &["propagating", "growing", "moderate"],
                major: &["through", "structural", "major"],
                critical: &["critical", "immediate", "safety"],
            },
            DefectType::Wear => SeverityIndicators {
                minor: &["light", "minor", "acceptable"],
                moderate: &["moderate", "noticeable"],
                major: &["excessive", "beyond limits"],
                critical: &["critical", "unsafe"],
            },
            DefectType::Damage => SeverityIndicators {
                minor: &["minor", "cosmetic", "surface"],
                moderate: &["moderate", "repairable"],
                major: &["major", "structural"],
                critical: &["critical", "unsafe", "immediate"],
            },
            DefectType::Leak => SeverityIndicators {
                minor: &["minor", "trace", "slight"],
                moderate: &["moderate", "noticeable"],
                major: &["major", "significant"],
                critical: &["severe", "continuous", "critical"],
            },
            DefectType::Loose => SeverityIndicators {
                minor: &["slight", "minor"],
                moderate: &["noticeable", "moderate"],
                major: &["excessive", "significant"],
                critical: &["critical", "unsafe"],
            },
            DefectType::Contamination => SeverityIndicators {
                minor: &["minor", "light"],
                moderate: &["moderate", "noticeable"],
                major: &["heavy", "significant"],
                critical: &["critical", "blocking"],
            },
            DefectType::Misalignment => SeverityIndicators {
                minor: &["slight", "minor"],
                moderate: &["noticeable", "moderate"],
                major: &["significant", "major"],
                critical: &["critical", "unsafe"],
            },
        }
    }

    /// Parse a wire name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.iter().copied().find(|d| d.as_str() == name)
    }
}

impl std::fmt::Display for DefectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maintenance action performed on the aircraft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceAction {
    Inspect,
    Clean,
    Repair,
    Replace,
    Remove,
    Adjust,
    Lubricate,
    Tighten,
    Test,
    Treat,
    Blend,
}

impl MaintenanceAction {
    /// Every action in detection order
    pub const ALL: [MaintenanceAction; 11] = [
        MaintenanceAction::Inspect,
        MaintenanceAction::Clean,
        MaintenanceAction::Repair,
        MaintenanceAction::Replace,
        MaintenanceAction::Remove,
        MaintenanceAction::Adjust,
        MaintenanceAction::Lubricate,
        MaintenanceAction::Tighten,
        MaintenanceAction::Test,
        MaintenanceAction::Treat,
        MaintenanceAction::Blend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceAction::Inspect => "inspect",
            MaintenanceAction::Clean => "clean",
            MaintenanceAction::Repair => "repair",
            MaintenanceAction::Replace => "replace",
            MaintenanceAction::Remove => "remove",
            MaintenanceAction::Adjust => "adjust",
            MaintenanceAction::Lubricate => "lubricate",
            MaintenanceAction::Tighten => "tighten",
            MaintenanceAction::Test => "test",
            MaintenanceAction::Treat => "treat",
            MaintenanceAction::Blend => "blend",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            MaintenanceAction::Inspect => &[
                "inspect",
                "inspected",
                "inspection",
                "check",
                "checked",
                "examine",
                "review",
            ],
            MaintenanceAction::Clean => &[
                "clean", "cleaned", "cleaning", "wash", "washed", "degreased",
            ],
            MaintenanceAction::Repair => &["repair", "repaired", "fix", "fixed", "mend", "patched"],
            MaintenanceAction::Replace => &[
                "replace",
                "replaced",
                "change",
                "changed",
                "install",
                "installed",
            ],
            MaintenanceAction::Remove => &["remove", "removed", "take out", "extract", "uninstall"],
            MaintenanceAction::Adjust => &[
                "adjust",
                "adjusted",
                "rig",
                "rigged",
                "align",
                "aligned",
                "calibrate",
            ],
            MaintenanceAction::Lubricate => &[
                "lubricate",
                "lubricated",
                "grease",
                "greased",
                "oil",
                "oiled",
            ],
            MaintenanceAction::Tighten => &[
                "tighten",
                "tightened",
                "torque",
                "torqued",
                "secure",
                "secured",
            ],
            MaintenanceAction::Test => &[
                "test", "tested", "check", "verify", "verified", "operate", "operated",
            ],
            MaintenanceAction::Treat => &[
                "treat", "treated", "prime", "primed", "coat", "coated", "seal", "sealed",
            ],
            MaintenanceAction::Blend => &["blend", "blended", "blend out", "smooth", "smoothed"],
        }
    }
}

impl std::fmt::Display for MaintenanceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phrases that flag a report as safety-critical, independent of severity
pub const SAFETY_CRITICAL_INDICATORS: &[&str] = &[
    "flight safety",
    "critical",
    "immediate",
    "emergency",
    "unsafe",
    "hazardous",
    "primary structure",
    "flight control",
    "engine",
    "landing gear",
    "brake",
];

/// What a limit reference says about the defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    /// "within limits": recorded, never changes severity
    Within,
    /// "out of / beyond / exceeds limits": severity raised to at least major
    Exceeded,
    /// Neutral reference to a limit source
    Reference,
}

/// Limit-reference patterns (case-insensitive)
pub const LIMIT_PATTERNS: &[(LimitKind, &str)] = &[
    (LimitKind::Within, r"within\s+limits"),
    (LimitKind::Exceeded, r"out\s+of\s+limits"),
    (LimitKind::Exceeded, r"beyond\s+limits"),
    (LimitKind::Exceeded, r"exceeds?\s+limits"),
    (LimitKind::Reference, r"per\s+srm\s*\d{2}-\d{2}-\d{2}"),
    (LimitKind::Reference, r"allowable\s+limits"),
    (LimitKind::Reference, r"specification\s+limits"),
];

/// Severity floor applied when a limit exceedance is reported
pub const EXCEEDANCE_FLOOR: Severity = Severity::Major;

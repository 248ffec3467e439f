// iSpec 2200 Part Tables
//
// Part categories (boolean membership by keyword), curated per-subsystem part
// names, compound contextual part rules, the tool exclusion list and the
// part-number pattern set.

use serde::{Deserialize, Serialize};

/// iSpec 2200 part category
///
/// Declaration order is the order categories are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartCategory {
    Structure,
    Fasteners,
    SealsGaskets,
    Electrical,
    Hydraulic,
    Pneumatic,
    Mechanical,
    Surfaces,
    Consumables,
}

impl PartCategory {
    /// Every category in declaration order
    pub const ALL: [PartCategory; 9] = [
        PartCategory::Structure,
        PartCategory::Fasteners,
        PartCategory::SealsGaskets,
        PartCategory::Electrical,
        PartCategory::Hydraulic,
        PartCategory::Pneumatic,
        PartCategory::Mechanical,
        PartCategory::Surfaces,
        PartCategory::Consumables,
    ];

    /// Wire name (snake_case)
    pub fn as_str(&self) -> &'static str {
        match self {
            PartCategory::Structure => "structure",
            PartCategory::Fasteners => "fasteners",
            PartCategory::SealsGaskets => "seals_gaskets",
            PartCategory::Electrical => "electrical",
            PartCategory::Hydraulic => "hydraulic",
            PartCategory::Pneumatic => "pneumatic",
            PartCategory::Mechanical => "mechanical",
            PartCategory::Surfaces => "surfaces",
            PartCategory::Consumables => "consumables",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PartCategory::Structure => "Structural components and framework",
            PartCategory::Fasteners => "Fastening hardware and connecting elements",
            PartCategory::SealsGaskets => "Sealing components and weather protection",
            PartCategory::Electrical => "Electrical components and wiring",
            PartCategory::Hydraulic => "Hydraulic system components",
            PartCategory::Pneumatic => "Pneumatic and air system components",
            PartCategory::Mechanical => "Mechanical components and moving parts",
            PartCategory::Surfaces => "Surface treatments and protective coatings",
            PartCategory::Consumables => "Consumable materials and fluids",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            PartCategory::Structure => &[
                "frame", "bulkhead", "stringer", "rib", "spar", "skin", "panel", "doubler",
            ],
            PartCategory::Fasteners => &[
                "bolt", "screw", "rivet", "nut", "washer", "pin", "clip", "clamp",
            ],
            PartCategory::SealsGaskets => &["seal", "gasket", "o-ring", "packing", "weather strip"],
            PartCategory::Electrical => &[
                "connector", "wire", "cable", "harness", "switch", "relay", "fuse", "breaker",
            ],
            PartCategory::Hydraulic => &[
                "actuator",
                "cylinder",
                "pump",
                "valve",
                "reservoir",
                "accumulator",
                "filter",
            ],
            PartCategory::Pneumatic => &["duct", "valve", "regulator", "manifold", "coupling", "clamp"],
            PartCategory::Mechanical => &[
                "bearing", "bushing", "shaft", "gear", "pulley", "spring", "linkage",
            ],
            PartCategory::Surfaces => &["coating", "paint", "primer", "sealant", "tape", "film"],
            PartCategory::Consumables => &["fluid", "oil", "grease", "solvent", "cleaner", "compound"],
        }
    }

    /// Parse a wire name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for PartCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aircraft subsystem grouping for curated part names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartGroup {
    LandingGear,
    ControlSurfaces,
    Engines,
    Fuselage,
    Wings,
    Systems,
}

impl PartGroup {
    /// Scan order for part detection
    pub const ALL: [PartGroup; 6] = [
        PartGroup::LandingGear,
        PartGroup::ControlSurfaces,
        PartGroup::Engines,
        PartGroup::Fuselage,
        PartGroup::Wings,
        PartGroup::Systems,
    ];

    pub fn parts(&self) -> &'static [&'static str] {
        match self {
            PartGroup::LandingGear => &[
                "strut",
                "shock absorber",
                "wheel",
                "tire",
                "brake",
                "gear door",
                "actuator",
            ],
            PartGroup::ControlSurfaces => &[
                "aileron", "elevator", "rudder", "flap", "slat", "spoiler", "tab",
            ],
            PartGroup::Engines => &[
                "compressor",
                "turbine",
                "combustor",
                "nozzle",
                "cowling",
                "mount",
            ],
            PartGroup::Fuselage => &["window", "door", "access panel", "antenna", "static port"],
            PartGroup::Wings => &[
                "leading edge",
                "trailing edge",
                "winglet",
                "fence",
                "root",
                "tip",
            ],
            PartGroup::Systems => &[
                "pump",
                "motor",
                "generator",
                "battery",
                "tank",
                "line",
                "valve",
            ],
        }
    }
}

/// Compound part rule: every required substring present adds the part
#[derive(Debug, Clone, Copy)]
pub struct PartRule {
    pub requires: &'static [&'static str],
    pub part: &'static str,
}

impl PartRule {
    pub fn matches(&self, text_lower: &str) -> bool {
        self.requires.iter().all(|needle| text_lower.contains(needle))
    }
}

/// Contextual part rules, applied in order after the curated lists
pub const PART_RULES: &[PartRule] = &[
    PartRule {
        requires: &["emergency", "exit"],
        part: "emergency exit light",
    },
    PartRule {
        requires: &["hydraulic", "actuator"],
        part: "hydraulic actuator",
    },
    PartRule {
        requires: &["bonding strap"],
        part: "bonding strap",
    },
    PartRule {
        requires: &["telescoping duct"],
        part: "telescoping duct",
    },
    PartRule {
        requires: &["spoiler"],
        part: "spoiler panel",
    },
    PartRule {
        requires: &["spoiler", "actuator"],
        part: "spoiler actuator",
    },
    PartRule {
        requires: &["tank", "boost pump"],
        part: "boost pump",
    },
];

/// Tools and ground equipment: mentioned in narratives, never reported as parts
pub const TOOLS_EQUIPMENT: &[&str] = &[
    "torque", "wrench", "socket", "drill", "bit", "gauge", "tester", "jack", "stand", "lift",
    "hoist", "crane", "sling",
];

/// Part-number patterns, run case-insensitively against the original text
pub const PART_NUMBER_PATTERNS: &[&str] = &[
    // General aerospace alphanumeric
    r"\b[A-Z]{1,3}\d{2,8}[A-Z]?\b",
    // Military Standard
    r"\bMS\d{5,6}[A-Z]?\d*\b",
    // Army-Navy
    r"\bAN\d{3,6}[A-Z]?\d*\b",
    // National Aerospace Standard
    r"\bNAS\d{3,6}[A-Z]?\d*\b",
    // Dash number
    r"\b\d{6}-\d{2,4}\b",
    // Maintenance manual reference
    r"\bm\.m\.\d{2}-\d{2}-\d{2}-\d+\b",
];

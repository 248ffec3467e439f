// ATA Spec 100 Chapter Table
//
// Closed chapter enumeration with code/name lookup, per-chapter keyword lists
// and the contextual bonus rules applied on top of keyword scores.

use serde::{Deserialize, Serialize};

/// Sentinel chapter code for unclassified reports
pub const UNKNOWN_CHAPTER_CODE: &str = "00";

/// Sentinel chapter name for unclassified reports
pub const UNKNOWN_CHAPTER_NAME: &str = "Unknown";

/// ATA Spec 100 chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AtaChapter {
    TimeLimits,
    Dimensions,
    LiftingShoring,
    LevelingWeighing,
    TowingTaxiing,
    ParkingMooring,
    Placards,
    Servicing,
    StandardPracticesAirframe,
    AirConditioning,
    AutoFlight,
    Communications,
    ElectricalPower,
    Equipment,
    FireProtection,
    FlightControls,
    Fuel,
    HydraulicPower,
    IceRainProtection,
    Indicating,
    LandingGear,
    Lights,
    Navigation,
    Oxygen,
    Pneumatic,
    AirborneAuxiliaryPower,
    Structures,
    Doors,
    Fuselage,
    Nacelles,
    Stabilizers,
    Windows,
    Wings,
    Propellers,
    PowerPlant,
    Engine,
    EngineFuel,
    Ignition,
    EngineAir,
    EngineControls,
    EngineIndicating,
    Exhaust,
    Oil,
    Starting,
}

impl AtaChapter {
    /// Every chapter in ascending code order
    pub const ALL: [AtaChapter; 44] = [
        AtaChapter::TimeLimits,
        AtaChapter::Dimensions,
        AtaChapter::LiftingShoring,
        AtaChapter::LevelingWeighing,
        AtaChapter::TowingTaxiing,
        AtaChapter::ParkingMooring,
        AtaChapter::Placards,
        AtaChapter::Servicing,
        AtaChapter::StandardPracticesAirframe,
        AtaChapter::AirConditioning,
        AtaChapter::AutoFlight,
        AtaChapter::Communications,
        AtaChapter::ElectricalPower,
        AtaChapter::Equipment,
        AtaChapter::FireProtection,
        AtaChapter::FlightControls,
        AtaChapter::Fuel,
        AtaChapter::HydraulicPower,
        AtaChapter::IceRainProtection,
        AtaChapter::Indicating,
        AtaChapter::LandingGear,
        AtaChapter::Lights,
        AtaChapter::Navigation,
        AtaChapter::Oxygen,
        AtaChapter::Pneumatic,
        AtaChapter::AirborneAuxiliaryPower,
        AtaChapter::Structures,
        AtaChapter::Doors,
        AtaChapter::Fuselage,
        AtaChapter::Nacelles,
        AtaChapter::Stabilizers,
        AtaChapter::Windows,
        AtaChapter::Wings,
        AtaChapter::Propellers,
        AtaChapter::PowerPlant,
        AtaChapter::Engine,
        AtaChapter::EngineFuel,
        AtaChapter::Ignition,
        AtaChapter::EngineAir,
        AtaChapter::EngineControls,
        AtaChapter::EngineIndicating,
        AtaChapter::Exhaust,
        AtaChapter::Oil,
        AtaChapter::Starting,
    ];

    /// Chapters that carry keywords, in keyword-table declaration order.
    ///
    /// This is also the scoring order: when two chapters end with the same
    /// score, the one listed first here wins.
    pub const SCORED: [AtaChapter; 26] = [
        AtaChapter::AirConditioning,
        AtaChapter::ElectricalPower,
        AtaChapter::Equipment,
        AtaChapter::FireProtection,
        AtaChapter::FlightControls,
        AtaChapter::Fuel,
        AtaChapter::HydraulicPower,
        AtaChapter::IceRainProtection,
        AtaChapter::Indicating,
        AtaChapter::LandingGear,
        AtaChapter::Lights,
        AtaChapter::Navigation,
        AtaChapter::Oxygen,
        AtaChapter::Pneumatic,
        AtaChapter::AirborneAuxiliaryPower,
        AtaChapter::Structures,
        AtaChapter::Doors,
        AtaChapter::Fuselage,
        AtaChapter::Nacelles,
        AtaChapter::Stabilizers,
        AtaChapter::Windows,
        AtaChapter::Wings,
        AtaChapter::Engine,
        AtaChapter::EngineFuel,
        AtaChapter::EngineControls,
        AtaChapter::Oil,
    ];

    /// Two-digit chapter code
    pub fn code(&self) -> &'static str {
        match self {
            AtaChapter::TimeLimits => "05",
            AtaChapter::Dimensions => "06",
            AtaChapter::LiftingShoring => "07",
            AtaChapter::LevelingWeighing => "08",
            AtaChapter::TowingTaxiing => "09",
            AtaChapter::ParkingMooring => "10",
            AtaChapter::Placards => "11",
            AtaChapter::Servicing => "12",
            AtaChapter::StandardPracticesAirframe => "20",
            AtaChapter::AirConditioning => "21",
            AtaChapter::AutoFlight => "22",
            AtaChapter::Communications => "23",
            AtaChapter::ElectricalPower => "24",
            AtaChapter::Equipment => "25",
            AtaChapter::FireProtection => "26",
            AtaChapter::FlightControls => "27",
            AtaChapter::Fuel => "28",
            AtaChapter::HydraulicPower => "29",
            AtaChapter::IceRainProtection => "30",
            AtaChapter::Indicating => "31",
            AtaChapter::LandingGear => "32",
            AtaChapter::Lights => "33",
            AtaChapter::Navigation => "34",
            AtaChapter::Oxygen => "35",
            AtaChapter::Pneumatic => "36",
            AtaChapter::AirborneAuxiliaryPower => "49",
            AtaChapter::Structures => "51",
            AtaChapter::Doors => "52",
            AtaChapter::Fuselage => "53",
            AtaChapter::Nacelles => "54",
            AtaChapter::Stabilizers => "55",
            AtaChapter::Windows => "56",
            AtaChapter::Wings => "57",
            AtaChapter::Propellers => "61",
            AtaChapter::PowerPlant => "71",
            AtaChapter::Engine => "72",
            AtaChapter::EngineFuel => "73",
            AtaChapter::Ignition => "74",
            AtaChapter::EngineAir => "75",
            AtaChapter::EngineControls => "76",
            AtaChapter::EngineIndicating => "77",
            AtaChapter::Exhaust => "78",
            AtaChapter::Oil => "79",
            AtaChapter::Starting => "80",
        }
    }

    /// Chapter title
    pub fn name(&self) -> &'static str {
        match self {
            AtaChapter::TimeLimits => "Time Limits/Maintenance Checks",
            AtaChapter::Dimensions => "Dimensions and Areas",
            AtaChapter::LiftingShoring => "Lifting and Shoring",
            AtaChapter::LevelingWeighing => "Leveling and Weighing",
            AtaChapter::TowingTaxiing => "Towing and Taxiing",
            AtaChapter::ParkingMooring => "Parking, Mooring, Storage and Return to Service",
            AtaChapter::Placards => "Placards and Markings",
            AtaChapter::Servicing => "Servicing",
            AtaChapter::StandardPracticesAirframe => "Standard Practices - Airframe",
            AtaChapter::AirConditioning => "Air Conditioning",
            AtaChapter::AutoFlight => "Auto Flight",
            AtaChapter::Communications => "Communications",
            AtaChapter::ElectricalPower => "Electrical Power",
            AtaChapter::Equipment => "Equipment/Furnishings",
            AtaChapter::FireProtection => "Fire Protection",
            AtaChapter::FlightControls => "Flight Controls",
            AtaChapter::Fuel => "Fuel",
            AtaChapter::HydraulicPower => "Hydraulic Power",
            AtaChapter::IceRainProtection => "Ice and Rain Protection",
            AtaChapter::Indicating => "Indicating/Recording Systems",
            AtaChapter::LandingGear => "Landing Gear",
            AtaChapter::Lights => "Lights",
            AtaChapter::Navigation => "Navigation",
            AtaChapter::Oxygen => "Oxygen",
            AtaChapter::Pneumatic => "Pneumatic",
            AtaChapter::AirborneAuxiliaryPower => "Airborne Auxiliary Power",
            AtaChapter::Structures => "Standard Practices and Structures - General",
            AtaChapter::Doors => "Doors",
            AtaChapter::Fuselage => "Fuselage",
            AtaChapter::Nacelles => "Nacelles/Pylons",
            AtaChapter::Stabilizers => "Stabilizers",
            AtaChapter::Windows => "Windows",
            AtaChapter::Wings => "Wings",
            AtaChapter::Propellers => "Propellers/Propulsors",
            AtaChapter::PowerPlant => "Power Plant - General",
            AtaChapter::Engine => "Engine - Turbine/Turbo Prop",
            AtaChapter::EngineFuel => "Engine Fuel and Control",
            AtaChapter::Ignition => "Ignition",
            AtaChapter::EngineAir => "Air",
            AtaChapter::EngineControls => "Engine Controls",
            AtaChapter::EngineIndicating => "Engine Indicating",
            AtaChapter::Exhaust => "Exhaust",
            AtaChapter::Oil => "Oil",
            AtaChapter::Starting => "Starting",
        }
    }

    /// Keyword list used for substring-count scoring (empty for unscored chapters)
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            AtaChapter::AirConditioning => &[
                "air conditioning",
                "cooling",
                "heating",
                "temperature",
                "hvac",
                "conditioner",
                "cabin temperature",
            ],
            AtaChapter::ElectricalPower => &[
                "electrical",
                "power",
                "battery",
                "generator",
                "wiring",
                "connector",
                "circuit",
                "voltage",
            ],
            AtaChapter::Equipment => &[
                "seat",
                "galley",
                "lavatory",
                "cabin",
                "interior",
                "furnishing",
                "equipment",
            ],
            AtaChapter::FireProtection => &[
                "fire",
                "smoke",
                "extinguisher",
                "detector",
                "suppression",
                "fire protection",
            ],
            AtaChapter::FlightControls => &[
                "flight control",
                "aileron",
                "elevator",
                "rudder",
                "spoiler",
                "trim",
                "control surface",
            ],
            AtaChapter::Fuel => &["fuel", "tank", "pump", "line", "valve", "quantity", "fuel system"],
            AtaChapter::HydraulicPower => &[
                "hydraulic",
                "pressure",
                "reservoir",
                "actuator",
                "pump",
                "fluid",
                "hydraulics",
            ],
            AtaChapter::IceRainProtection => &[
                "ice",
                "rain",
                "deicing",
                "anti-ice",
                "pitot",
                "static",
                "ice protection",
            ],
            AtaChapter::Indicating => &[
                "instrument",
                "indicator",
                "display",
                "gauge",
                "warning",
                "caution",
                "alert",
            ],
            AtaChapter::LandingGear => &[
                "landing gear",
                "gear",
                "wheel",
                "brake",
                "tire",
                "strut",
                "nose gear",
                "main gear",
            ],
            AtaChapter::Lights => &[
                "light",
                "lighting",
                "beacon",
                "strobe",
                "navigation light",
                "landing light",
            ],
            AtaChapter::Navigation => &["navigation", "gps", "compass", "radio", "antenna", "vor", "ils"],
            AtaChapter::Oxygen => &["oxygen", "mask", "bottle", "regulator", "oxygen system"],
            AtaChapter::Pneumatic => &["pneumatic", "air", "bleed", "pressure", "valve", "duct"],
            AtaChapter::AirborneAuxiliaryPower => &["apu", "auxiliary power", "generator", "bleed air"],
            AtaChapter::Structures => &[
                "structure",
                "frame",
                "bulkhead",
                "stringer",
                "repair",
                "corrosion",
                "crack",
            ],
            AtaChapter::Doors => &["door", "hatch", "access panel", "cargo door", "passenger door"],
            AtaChapter::Fuselage => &["fuselage", "skin", "panel", "window", "frame", "structure"],
            AtaChapter::Nacelles => &["nacelle", "pylon", "engine mount", "cowling"],
            AtaChapter::Stabilizers => &[
                "stabilizer",
                "horizontal stabilizer",
                "vertical stabilizer",
                "fin",
            ],
            AtaChapter::Windows => &["window", "windshield", "glass", "seal"],
            AtaChapter::Wings => &["wing", "winglet", "flap", "slat", "wing box"],
            AtaChapter::Engine => &["engine", "turbine", "compressor", "combustor", "nozzle"],
            AtaChapter::EngineFuel => &["fuel control", "fuel metering", "throttle", "fuel pump"],
            AtaChapter::EngineControls => &["engine control", "fadec", "eec", "thrust"],
            AtaChapter::Oil => &["oil", "lubrication", "filter", "cooler", "oil system"],
            _ => &[],
        }
    }

    /// Look up a chapter by its two-digit code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for AtaChapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code(), self.name())
    }
}

/// Contextual bonus rule: fires when every required substring is present
#[derive(Debug, Clone, Copy)]
pub struct ContextRule {
    /// Substrings that must all appear in the lower-cased text
    pub requires: &'static [&'static str],
    /// Chapter credited
    pub chapter: AtaChapter,
    /// Score added on top of keyword counts
    pub bonus: f64,
    /// Label appended to the chapter's matched keywords
    pub label: &'static str,
}

impl ContextRule {
    /// Whether the rule fires on lower-cased text
    pub fn matches(&self, text_lower: &str) -> bool {
        self.requires.iter().all(|needle| text_lower.contains(needle))
    }
}

/// Contextual override rules, evaluated in order and always additive
pub const CONTEXT_RULES: &[ContextRule] = &[
    ContextRule {
        requires: &["corrosion"],
        chapter: AtaChapter::Structures,
        bonus: 3.0,
        label: "corrosion",
    },
    ContextRule {
        requires: &["crack"],
        chapter: AtaChapter::Structures,
        bonus: 3.0,
        label: "crack",
    },
    ContextRule {
        requires: &["spoiler"],
        chapter: AtaChapter::FlightControls,
        bonus: 2.0,
        label: "spoiler",
    },
    ContextRule {
        requires: &["actuator", "gear"],
        chapter: AtaChapter::LandingGear,
        bonus: 2.0,
        label: "gear actuator",
    },
    ContextRule {
        requires: &["bonding strap"],
        chapter: AtaChapter::ElectricalPower,
        bonus: 2.0,
        label: "bonding strap",
    },
    ContextRule {
        requires: &["emergency", "exit"],
        chapter: AtaChapter::Equipment,
        bonus: 2.0,
        label: "emergency exit",
    },
    ContextRule {
        requires: &["telescoping duct"],
        chapter: AtaChapter::Pneumatic,
        bonus: 2.0,
        label: "telescoping duct",
    },
];

/// Score credited to chapter 51 for each matching SRM reference pattern
pub const SRM_REFERENCE_BONUS: f64 = 2.0;

/// Matched-keyword label recorded for SRM reference credit
pub const SRM_REFERENCE_LABEL: &str = "srm reference";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_unique_and_two_digit() {
        let codes: HashSet<_> = AtaChapter::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), AtaChapter::ALL.len());
        for code in codes {
            assert_eq!(code.len(), 2);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(code, UNKNOWN_CHAPTER_CODE);
        }
    }

    #[test]
    fn test_all_is_ascending() {
        let codes: Vec<_> = AtaChapter::ALL.iter().map(|c| c.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_scored_chapters_have_keywords() {
        for chapter in AtaChapter::SCORED {
            assert!(!chapter.keywords().is_empty(), "{} has no keywords", chapter);
        }
        let scored: HashSet<_> = AtaChapter::SCORED.iter().collect();
        for chapter in AtaChapter::ALL {
            if !scored.contains(&chapter) {
                assert!(chapter.keywords().is_empty(), "{} keywords unused", chapter);
            }
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(AtaChapter::from_code("32"), Some(AtaChapter::LandingGear));
        assert_eq!(AtaChapter::from_code("00"), None);
        assert_eq!(AtaChapter::from_code("99"), None);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for chapter in AtaChapter::ALL {
            for keyword in chapter.keywords() {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_context_rules_target_scored_chapters() {
        for rule in CONTEXT_RULES {
            assert!(AtaChapter::SCORED.contains(&rule.chapter));
            assert!(rule.bonus > 0.0);
        }
    }
}

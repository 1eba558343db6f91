//! Enumerated string values the formats accept.

/// QuakeML 1.2 event types that can be classified automatically.
pub const EVENT_TYPES: [&str; 9] = [
    "Earthquake",
    "MineCollapse",
    "NuclearExplosion",
    "QuarryBlast",
    "InducedOrTriggered",
    "RockBurst",
    "FluidInjection",
    "IceQuake",
    "VolcanicEruption",
];

pub const EVENT_TYPE_CERTAINTIES: [&str; 2] = ["Suspected", "Confirmed"];

pub const DETECTION_TYPES: [&str; 4] = ["New", "Update", "Final", "Retract"];

pub fn is_event_type(value: &str) -> bool {
    EVENT_TYPES.contains(&value)
}

pub fn is_event_type_certainty(value: &str) -> bool {
    EVENT_TYPE_CERTAINTIES.contains(&value)
}

pub fn is_detection_type(value: &str) -> bool {
    DETECTION_TYPES.contains(&value)
}

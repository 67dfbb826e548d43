use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Growth rate, which determines how much experience is required for a species to level up.
///
/// Raw reference data uses descriptive names for the two irregular curves, which are accepted as
/// aliases.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum GrowthRate {
    #[string = "slow"]
    #[alias = "fast-then-very-slow"]
    Slow,
    #[string = "medium-slow"]
    MediumSlow,
    #[string = "medium"]
    Medium,
    #[string = "medium-fast"]
    MediumFast,
    #[string = "fast"]
    Fast,
    #[string = "erratic"]
    #[alias = "slow-then-very-fast"]
    Erratic,
}

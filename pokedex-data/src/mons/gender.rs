use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The gender of an individual Mon.
///
/// Species records only carry a gender rate; the concrete gender is rolled downstream.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Gender {
    #[string = "male"]
    #[alias = "M"]
    Male,
    #[string = "female"]
    #[alias = "F"]
    Female,
    #[string = "genderless"]
    #[alias = "U"]
    #[default]
    Genderless,
}

impl Gender {
    /// Gender rate marking a genderless species.
    pub const GENDERLESS_RATE: i8 = -1;

    /// Whether the given gender rate describes a species that can be the given gender.
    ///
    /// Gender rate is the chance of a Mon being female, in eighths. `-1` means genderless.
    pub fn possible_with_rate(&self, gender_rate: i8) -> bool {
        match self {
            Self::Genderless => gender_rate == Self::GENDERLESS_RATE,
            Self::Male => (0..8).contains(&gender_rate),
            Self::Female => (1..=8).contains(&gender_rate),
        }
    }
}

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A named partition of reference data with a typed model.
///
/// The category name is the base name of the file the records are read from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Category {
    #[string = "pokemon"]
    Pokemon,
    #[string = "moves"]
    Moves,
}

impl Category {
    /// Every category with a typed model.
    pub const ALL: [Self; 2] = [Self::Pokemon, Self::Moves];

    /// Key of the category in a raw record store.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Moves => "moves",
        }
    }
}

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A region a species can be encountered in.
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
pub enum Region {
    #[string = "kanto"]
    Kanto,
    #[string = "johto"]
    Johto,
    #[string = "hoenn"]
    Hoenn,
    #[string = "sinnoh"]
    Sinnoh,
    #[string = "unova"]
    Unova,
    #[string = "kalos"]
    Kalos,
    #[string = "alola"]
    Alola,
    #[string = "galar"]
    Galar,
    #[string = "hisui"]
    Hisui,
    #[string = "paldea"]
    Paldea,
}

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move.
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
pub enum Type {
    #[string = "normal"]
    Normal,
    #[string = "fighting"]
    Fighting,
    #[string = "flying"]
    Flying,
    #[string = "poison"]
    Poison,
    #[string = "ground"]
    Ground,
    #[string = "rock"]
    Rock,
    #[string = "bug"]
    Bug,
    #[string = "ghost"]
    Ghost,
    #[string = "steel"]
    Steel,
    #[string = "fire"]
    Fire,
    #[string = "water"]
    Water,
    #[string = "grass"]
    Grass,
    #[string = "electric"]
    Electric,
    #[string = "psychic"]
    Psychic,
    #[string = "ice"]
    Ice,
    #[string = "dragon"]
    Dragon,
    #[string = "dark"]
    Dark,
    #[string = "fairy"]
    Fairy,
    #[string = "stellar"]
    Stellar,
    /// Typeless moves, such as Struggle in some generations.
    #[string = "unknown"]
    #[alias = "???"]
    Unknown,
    #[string = "shadow"]
    Shadow,
}

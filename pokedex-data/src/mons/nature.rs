use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The nature of an individual Mon.
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
pub enum Nature {
    #[string = "hardy"]
    Hardy,
    #[string = "lonely"]
    Lonely,
    #[string = "brave"]
    Brave,
    #[string = "adamant"]
    Adamant,
    #[string = "naughty"]
    Naughty,
    #[string = "bold"]
    Bold,
    #[string = "docile"]
    Docile,
    #[string = "relaxed"]
    Relaxed,
    #[string = "impish"]
    Impish,
    #[string = "lax"]
    Lax,
    #[string = "timid"]
    Timid,
    #[string = "hasty"]
    Hasty,
    #[string = "serious"]
    Serious,
    #[string = "jolly"]
    Jolly,
    #[string = "naive"]
    Naive,
    #[string = "modest"]
    Modest,
    #[string = "mild"]
    Mild,
    #[string = "quiet"]
    Quiet,
    #[string = "bashful"]
    Bashful,
    #[string = "rash"]
    Rash,
    #[string = "calm"]
    Calm,
    #[string = "gentle"]
    Gentle,
    #[string = "sassy"]
    Sassy,
    #[string = "careful"]
    Careful,
    #[string = "quirky"]
    Quirky,
}

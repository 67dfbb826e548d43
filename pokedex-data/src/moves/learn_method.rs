use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// How a species acquires a move.
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
pub enum LearnMethod {
    #[string = "level-up"]
    LevelUp,
    #[string = "tutor"]
    Tutor,
    /// TMs and TRs.
    #[string = "machine"]
    Machine,
    #[string = "egg"]
    Egg,
    #[string = "form-change"]
    FormChange,
}

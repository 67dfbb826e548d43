use serde::Serialize;

use crate::{
    Accuracy,
    Category,
    ConstructionError,
    DamageClass,
    Power,
    RawRecord,
    RecordReader,
    Resource,
    Type,
    vocabulary,
};

/// A move record.
///
/// Moves are equal if their ID and name are equal.
#[derive(Debug, Clone, Eq, Serialize)]
pub struct Move {
    pub id: u32,
    /// Normalized name of the move.
    pub name: String,
    pub power: Power,
    pub accuracy: Accuracy,
    /// Elemental type of the move, if recognized.
    #[serde(rename = "type")]
    pub move_type: Option<Type>,
    /// Damage class of the move, if recognized.
    ///
    /// Status moves have no damage class.
    pub damage_class: Option<DamageClass>,
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Resource for Move {
    const CATEGORY: Category = Category::Moves;

    fn from_record(record: &RawRecord) -> Result<Self, ConstructionError> {
        let reader = RecordReader::new(Self::CATEGORY, record);
        let (id, name) = reader.identity()?;
        Ok(Self {
            id,
            name,
            power: reader.required("power")?,
            accuracy: reader.required("accuracy")?,
            move_type: reader
                .optional::<String>("type")?
                .and_then(|token| vocabulary::elemental_type(&token)),
            damage_class: reader
                .optional::<String>("damage_class")?
                .and_then(|token| vocabulary::damage_class(&token)),
        })
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

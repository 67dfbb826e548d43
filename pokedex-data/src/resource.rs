use serde::Serialize;

use crate::{
    Category,
    ConstructionError,
    Move,
    RawRecord,
    Species,
};

/// A typed resource that can be looked up by ID or name within its category.
pub trait Resource: Sized {
    /// The category the resource is read from.
    const CATEGORY: Category;

    /// Builds the resource from a raw record, failing closed on any missing or malformed field.
    fn from_record(record: &RawRecord) -> Result<Self, ConstructionError>;

    /// Unique ID within the category.
    fn id(&self) -> u32;

    /// Unique, normalized name within the category.
    fn name(&self) -> &str;
}

/// A resource of any category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyResource {
    Species(Species),
    Move(Move),
}

impl AnyResource {
    /// Builds the typed resource for the given category from a raw record.
    pub fn from_record(category: Category, record: &RawRecord) -> Result<Self, ConstructionError> {
        match category {
            Category::Pokemon => Species::from_record(record).map(Self::Species),
            Category::Moves => Move::from_record(record).map(Self::Move),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Species(_) => Category::Pokemon,
            Self::Move(_) => Category::Moves,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Self::Species(species) => species.id(),
            Self::Move(mov) => mov.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Species(species) => species.name(),
            Self::Move(mov) => mov.name(),
        }
    }

    pub fn as_species(&self) -> Option<&Species> {
        match self {
            Self::Species(species) => Some(species),
            _ => None,
        }
    }

    pub fn as_move(&self) -> Option<&Move> {
        match self {
            Self::Move(mov) => Some(mov),
            _ => None,
        }
    }
}

impl From<Species> for AnyResource {
    fn from(value: Species) -> Self {
        Self::Species(value)
    }
}

impl From<Move> for AnyResource {
    fn from(value: Move) -> Self {
        Self::Move(value)
    }
}

impl TryFrom<AnyResource> for Species {
    type Error = AnyResource;

    fn try_from(value: AnyResource) -> Result<Self, Self::Error> {
        match value {
            AnyResource::Species(species) => Ok(species),
            other => Err(other),
        }
    }
}

impl TryFrom<AnyResource> for Move {
    type Error = AnyResource;

    fn try_from(value: AnyResource) -> Result<Self, Self::Error> {
        match value {
            AnyResource::Move(mov) => Ok(mov),
            other => Err(other),
        }
    }
}

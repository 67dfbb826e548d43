use serde::Serialize;

use crate::{
    BaseStats,
    Category,
    ConstructionError,
    EvYields,
    EvolutionTarget,
    GrowthRate,
    LearnableMoves,
    RawRecord,
    RecordReader,
    Region,
    Resource,
    SerializedLearnableMoves,
    Sprites,
    Type,
    vocabulary,
};

/// A species record.
///
/// Species are equal if their ID and name are equal.
#[derive(Debug, Clone, Eq, Serialize)]
pub struct Species {
    pub id: u32,
    /// Normalized name of the species.
    pub name: String,
    pub is_legendary: bool,
    pub is_mythical: bool,
    /// Relative chance of the species appearing in the wild.
    pub appear_rate: u8,
    /// Catch rate, a value between 0 and 255.
    pub capture_rate: u8,
    /// Chance of a Mon being female, in eighths. `-1` means genderless.
    pub gender_rate: i8,
    pub growth_rate: GrowthRate,
    /// ID of the species this species evolves from.
    ///
    /// This is a weak reference. The full species requires another lookup.
    pub evolves_from: Option<u32>,
    pub evolves_to: Option<EvolutionTarget>,
    /// One or two elemental types, in order.
    pub types: Vec<Type>,
    pub base_stats: BaseStats,
    pub ev_yields: EvYields,
    pub sprites: Sprites,
    pub regions: Vec<Region>,
    pub learnable_moves: LearnableMoves,
}

impl Species {
    /// The primary type of the species.
    pub fn primary_type(&self) -> Type {
        self.types[0]
    }

    /// The secondary type of the species, if it exists.
    pub fn secondary_type(&self) -> Option<Type> {
        self.types.get(1).copied()
    }

    /// Checks if the species can be encountered in the given region.
    pub fn appears_in(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }
}

impl PartialEq for Species {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

fn read_types(reader: &RecordReader) -> Result<Vec<Type>, ConstructionError> {
    let mut types = Vec::new();
    for token in reader.required::<Vec<String>>("types")? {
        if let Some(typ) = vocabulary::elemental_type(&token) {
            if !types.contains(&typ) {
                types.push(typ);
            }
        }
    }
    if !(1..=2).contains(&types.len()) {
        return Err(reader.malformed(
            "types",
            format!(
                "must hold one or two recognized types, but holds {}",
                types.len()
            ),
        ));
    }
    Ok(types)
}

fn read_regions(reader: &RecordReader) -> Result<Vec<Region>, ConstructionError> {
    let mut regions = Vec::new();
    for token in reader.required::<Vec<String>>("regions")? {
        if let Some(region) = vocabulary::region(&token) {
            if !regions.contains(&region) {
                regions.push(region);
            }
        }
    }
    Ok(regions)
}

impl Resource for Species {
    const CATEGORY: Category = Category::Pokemon;

    fn from_record(record: &RawRecord) -> Result<Self, ConstructionError> {
        let reader = RecordReader::new(Self::CATEGORY, record);
        let (id, name) = reader.identity()?;
        let growth_rate = vocabulary::growth_rate(&reader.required::<String>("growth_rate")?)
            .map_err(|err| reader.unrecognized("growth_rate", err))?;
        Ok(Self {
            id,
            name,
            is_legendary: reader.required("is_legendary")?,
            is_mythical: reader.required("is_mythical")?,
            appear_rate: reader.required("appear_rate")?,
            capture_rate: reader.required("capture_rate")?,
            gender_rate: reader.required("gender_rate")?,
            growth_rate,
            evolves_from: reader.optional("evolves_from")?,
            evolves_to: reader.optional("evolves_to")?,
            types: read_types(&reader)?,
            base_stats: reader.required("base_stats")?,
            ev_yields: reader.required("ev_yields")?,
            sprites: reader.required("sprites")?,
            regions: read_regions(&reader)?,
            learnable_moves: LearnableMoves::from_methods(
                reader.required::<SerializedLearnableMoves>("learnable_moves")?,
            ),
        })
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Maximum IV for a single stat.
pub const MAX_IV_PER_STAT: u8 = 31;

/// Maximum EV for a single stat.
pub const MAX_EV_PER_STAT: u8 = 252;

/// A single stat.
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
pub enum Stat {
    #[string = "health_points"]
    #[alias = "hp"]
    HealthPoints,
    #[string = "attack"]
    Attack,
    #[string = "defense"]
    #[alias = "defence"]
    Defense,
    #[string = "special_attack"]
    #[alias = "special-attack"]
    SpecialAttack,
    #[string = "special_defense"]
    #[alias = "special-defense"]
    SpecialDefense,
    #[string = "speed"]
    Speed,
}

impl Stat {
    /// All stats, in canonical order.
    pub const ALL: [Stat; 6] = [
        Stat::HealthPoints,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];
}

/// Effort value yield when defeating a species, keyed by stat name as it appears in the data.
pub type EvYields = IndexMap<String, u8>;

/// Base stats of a species.
///
/// Each stat carries per-version-group detail. The shape of that detail is owned by whoever
/// formats it, so it is kept as an opaque JSON value here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub health_points: Value,
    pub attack: Value,
    pub defense: Value,
    pub special_attack: Value,
    pub special_defense: Value,
    pub speed: Value,
}

impl BaseStats {
    /// Returns the detail for the given stat.
    pub fn get(&self, stat: Stat) -> &Value {
        match stat {
            Stat::HealthPoints => &self.health_points,
            Stat::Attack => &self.attack,
            Stat::Defense => &self.defense,
            Stat::SpecialAttack => &self.special_attack,
            Stat::SpecialDefense => &self.special_defense,
            Stat::Speed => &self.speed,
        }
    }

    /// Creates an iterator over all stat entries, in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (Stat, &Value)> {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }
}

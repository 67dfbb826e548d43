use serde::{
    Deserialize,
    Serialize,
};

/// Forward evolution edge from one species to another.
///
/// Only the identity of the target is recorded. Resolving the full target species is a separate
/// lookup by [`EvolutionTarget::id`].
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct EvolutionTarget {
    /// ID of the species evolved into.
    pub id: u32,
    /// Name of the species evolved into.
    pub name: String,
    /// Minimum level that must be reached for evolution.
    ///
    /// Evolutions triggered by something other than leveling up have no minimum level.
    #[serde(default)]
    pub min_level: Option<u8>,
}

impl PartialEq for EvolutionTarget {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

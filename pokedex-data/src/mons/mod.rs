mod evolution;
mod gender;
mod growth_rate;
mod learnset;
mod nature;
mod region;
mod species;
mod sprites;
mod stat;
mod r#type;

pub use evolution::EvolutionTarget;
pub use gender::Gender;
pub use growth_rate::GrowthRate;
pub use learnset::{
    LearnableMove,
    LearnableMoves,
    SerializedLearnableMoves,
};
pub use nature::Nature;
pub use region::Region;
pub use species::Species;
pub use sprites::Sprites;
pub use stat::{
    BaseStats,
    EvYields,
    MAX_EV_PER_STAT,
    MAX_IV_PER_STAT,
    Stat,
};
pub use r#type::Type;

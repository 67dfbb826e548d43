use serde::{
    Deserialize,
    Serialize,
};

/// Artwork locations for a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    /// Normal artwork.
    pub normal: String,
    /// Shiny artwork.
    pub shiny: String,
}

use pokedex_data::{
    ConstructionError,
    DataLoadError,
};
use thiserror::Error;

/// Error raised by the resource engine.
///
/// Records that are not found are not errors; see [`Lookup`][`crate::Lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokedexError {
    /// Reference data could not be loaded within the retry budget.
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    /// A matched record could not be built into its typed model.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    /// The category is still absent after reloading reference data.
    #[error("category \"{0}\" is not present in the reference data")]
    CategoryMissing(String),
    /// The engine configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

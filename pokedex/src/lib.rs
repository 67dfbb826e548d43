//! # Pokedex
//!
//! A read-through lookup engine over static Pokemon reference data.
//!
//! Reference data is a directory of JSON files, one per category. The [`Pokedex`] loads every
//! category into memory and resolves queries against it:
//!
//! - IDs match exactly.
//! - Names are normalized (trimmed, lower-cased, spaces to hyphens) and matched exactly. If nothing
//!   matches, the closest names in the category are returned as candidates.
//! - Listings build every record in the category, skipping records that fail to build.
//!
//! ```no_run
//! use pokedex::{
//!     Lookup,
//!     Pokedex,
//!     PokedexConfig,
//! };
//!
//! let pokedex = Pokedex::new(&PokedexConfig::from_env(PokedexConfig::DATA_DIR_ENV)?)?;
//! match pokedex.get_pokemon("bulbazaur")? {
//!     Lookup::Found(species) => println!("{}", species.name),
//!     Lookup::Candidates(candidates) => {
//!         for species in candidates {
//!             println!("did you mean {}?", species.name);
//!         }
//!     }
//!     Lookup::NotFound => println!("no such species"),
//! }
//! # Ok::<(), pokedex::PokedexError>(())
//! ```
mod cache;
mod config;
mod error;
pub mod fuzzy;
mod index;
mod lookup;
mod pokedex;
mod query;

pub use cache::LookupCache;
pub use config::{
    LookupOptions,
    PokedexConfig,
};
pub use error::PokedexError;
pub use lookup::Lookup;
pub use pokedex::Pokedex;
pub use pokedex_data::{
    AnyResource,
    Category,
    Move,
    Region,
    Resource,
    Species,
};
pub use query::Query;

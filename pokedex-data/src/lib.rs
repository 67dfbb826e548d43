//! Typed resource models for the Pokedex resource engine.
//!
//! Raw reference data is a set of untyped field-maps ([`RawRecord`]) indexed by category
//! ([`RawRecordStore`]). This crate defines the vocabularies raw tokens are mapped into, the typed
//! models built from raw records, and the [`RecordSource`] trait data loaders implement.
extern crate alloc;

mod error;
mod mons;
mod moves;
mod name;
mod records;
mod resource;
pub mod vocabulary;

#[cfg(test)]
pub mod test_util;

pub use error::*;
pub use mons::*;
pub use moves::*;
pub use name::*;
pub use records::*;
pub use resource::*;

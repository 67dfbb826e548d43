use ahash::HashMap;

use crate::{
    DataLoadError,
    RawRecord,
};

/// All raw records, indexed by category name.
///
/// A store is built once and never mutated. Reloading produces a new store.
#[derive(Debug, Default, Clone)]
pub struct RawRecordStore {
    tables: HashMap<String, Vec<RawRecord>>,
}

impl RawRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the records of a category, in file order.
    pub fn get(&self, category: &str) -> Option<&[RawRecord]> {
        self.tables.get(category).map(Vec::as_slice)
    }

    /// Checks if the category exists.
    pub fn contains(&self, category: &str) -> bool {
        self.tables.contains_key(category)
    }

    /// Names of all categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = self.tables.keys().map(String::as_str).collect::<Vec<_>>();
        categories.sort_unstable();
        categories
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<(String, Vec<RawRecord>)> for RawRecordStore {
    fn from_iter<T: IntoIterator<Item = (String, Vec<RawRecord>)>>(iter: T) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

/// A source of reference data.
///
/// This trait can be implemented for different data sources, such as a local directory or an
/// in-memory fixture. Every call builds a complete, new [`RawRecordStore`].
pub trait RecordSource: Send + Sync {
    /// Loads all categories from the source.
    fn load(&self) -> Result<RawRecordStore, DataLoadError>;
}

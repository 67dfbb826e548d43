use ahash::HashMap;
use pokedex_data::{
    RawRecord,
    describe_record,
    normalize_name,
    record_id,
    record_name,
};

/// Lookup tables over the records of one category.
///
/// Positions refer to the category's records in file order. If two records share an ID or a
/// normalized name, the first one wins and the duplicate is only reachable through listings.
#[derive(Debug, Default)]
pub struct CategoryIndex {
    by_id: HashMap<u32, usize>,
    by_name: HashMap<String, usize>,
    /// Unique normalized names, in file order.
    names: Vec<(String, usize)>,
}

impl CategoryIndex {
    pub fn new(category: &str, records: &[RawRecord]) -> Self {
        let mut index = Self::default();
        for (position, record) in records.iter().enumerate() {
            if let Some(id) = record_id(record) {
                if index.by_id.contains_key(&id) {
                    log::warn!(
                        "duplicate {category} record {}: ID {id} is already taken",
                        describe_record(record)
                    );
                } else {
                    index.by_id.insert(id, position);
                }
            }
            let name = match record_name(record).map(normalize_name) {
                Some(name) if !name.is_empty() => name,
                _ => continue,
            };
            if index.by_name.contains_key(&name) {
                log::warn!(
                    "duplicate {category} record {}: name \"{name}\" is already taken",
                    describe_record(record)
                );
                continue;
            }
            index.by_name.insert(name.clone(), position);
            index.names.push((name, position));
        }
        index
    }

    /// Position of the record with the given ID.
    pub fn position_by_id(&self, id: u64) -> Option<usize> {
        let id = u32::try_from(id).ok()?;
        self.by_id.get(&id).copied()
    }

    /// Position of the record with the given normalized name.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Unique normalized names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|(name, _)| name.as_str())
    }

    /// Position of the record for the `n`-th name returned by [`Self::names`].
    pub fn position_of_name(&self, n: usize) -> Option<usize> {
        self.names.get(n).map(|(_, position)| *position)
    }
}

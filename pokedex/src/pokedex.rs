use std::{
    fmt,
    num::NonZeroUsize,
    sync::{
        Arc,
        PoisonError,
        RwLock,
    },
};

use ahash::HashMap;
use pokedex_data::{
    AnyResource,
    Category,
    ConstructionError,
    Move,
    RawRecord,
    RawRecordStore,
    RecordSource,
    Region,
    Resource,
    Species,
};

use crate::{
    Lookup,
    LookupCache,
    LookupOptions,
    PokedexConfig,
    PokedexError,
    Query,
    fuzzy,
    index::CategoryIndex,
};

/// One published generation of reference data.
///
/// A snapshot is never mutated after it is published, except for its cache. Reloading publishes a
/// new snapshot with a new, empty cache.
struct Snapshot {
    records: RawRecordStore,
    indexes: HashMap<Category, CategoryIndex>,
    cache: Option<LookupCache>,
}

impl Snapshot {
    fn new(records: RawRecordStore, cache_capacity: Option<NonZeroUsize>) -> Self {
        let indexes = Category::ALL
            .into_iter()
            .filter_map(|category| {
                let table = records.get(category.key())?;
                Some((category, CategoryIndex::new(category.key(), table)))
            })
            .collect();
        Self {
            records,
            indexes,
            cache: cache_capacity.map(LookupCache::new),
        }
    }

    fn empty() -> Self {
        Self {
            records: RawRecordStore::new(),
            indexes: HashMap::default(),
            cache: None,
        }
    }

    fn contains(&self, category: Category) -> bool {
        self.indexes.contains_key(&category)
    }

    fn table(&self, category: Category) -> &[RawRecord] {
        self.records.get(category.key()).unwrap_or_default()
    }

    fn resolve(
        &self,
        category: Category,
        query: &Query,
        options: &LookupOptions,
    ) -> Result<Lookup<AnyResource>, PokedexError> {
        let Some(index) = self.indexes.get(&category) else {
            return Ok(Lookup::NotFound);
        };
        let table = self.table(category);

        let position = match query {
            Query::Id(id) => index.position_by_id(*id),
            Query::Name(name) => index.position_by_name(name),
        };
        if let Some(position) = position {
            let resource = AnyResource::from_record(category, &table[position])?;
            return Ok(Lookup::Found(resource));
        }

        // IDs are exact.
        let Query::Name(name) = query else {
            return Ok(Lookup::NotFound);
        };
        let candidates = fuzzy::closest_matches(
            name,
            index.names(),
            options.max_candidates,
            options.fuzzy_cutoff,
        )
        .into_iter()
        .filter_map(|m| index.position_of_name(m.index))
        .filter_map(
            |position| match AnyResource::from_record(category, &table[position]) {
                Ok(resource) => Some(resource),
                Err(err) => {
                    log::warn!("skipping candidate for {category} {query}: {err}");
                    None
                }
            },
        )
        .collect::<Vec<_>>();

        if candidates.is_empty() {
            Ok(Lookup::NotFound)
        } else {
            Ok(Lookup::Candidates(candidates))
        }
    }

    fn list<T, F>(&self, category: Category, build: F) -> Vec<T>
    where
        F: Fn(&RawRecord) -> Result<T, ConstructionError>,
    {
        self.table(category)
            .iter()
            .filter_map(|record| match build(record) {
                Ok(resource) => Some(resource),
                Err(err) => {
                    log::warn!("skipping record in {category} listing: {err}");
                    None
                }
            })
            .collect()
    }
}

/// Read-through lookup engine over static reference data.
///
/// Reference data is loaded from a [`RecordSource`] and published as a whole. Lookups read
/// whatever data was published when they started, so a concurrent reload never exposes a
/// half-loaded category. A failed reload leaves the previously published data in place.
///
/// If a lookup targets a category that is not loaded, the data is reloaded once before the lookup
/// fails with [`PokedexError::CategoryMissing`].
pub struct Pokedex {
    source: Box<dyn RecordSource>,
    options: LookupOptions,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl fmt::Debug for Pokedex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pokedex")
            .field("options", &self.options)
            .field("categories", &self.categories())
            .finish()
    }
}

impl Pokedex {
    /// Creates a new Pokedex over the local data directory in the configuration.
    ///
    /// Reference data is loaded immediately.
    pub fn new(config: &PokedexConfig) -> Result<Self, PokedexError> {
        config.validate()?;
        Self::with_source(config.record_source(), config.lookup_options())
    }

    /// Creates a new Pokedex over the given source.
    ///
    /// Reference data is loaded immediately.
    pub fn with_source<S>(source: S, options: LookupOptions) -> Result<Self, PokedexError>
    where
        S: RecordSource + 'static,
    {
        let pokedex = Self::unloaded(source, options)?;
        pokedex.reload()?;
        Ok(pokedex)
    }

    /// Creates a new Pokedex over the given source without loading anything.
    ///
    /// Reference data is loaded by the first lookup.
    pub fn unloaded<S>(source: S, options: LookupOptions) -> Result<Self, PokedexError>
    where
        S: RecordSource + 'static,
    {
        options.validate()?;
        Ok(Self {
            source: Box::new(source),
            options,
            snapshot: RwLock::new(Arc::new(Snapshot::empty())),
        })
    }

    pub fn options(&self) -> &LookupOptions {
        &self.options
    }

    /// Reloads all reference data from the source.
    ///
    /// On success, the new data and an empty cache are published together. On failure, the
    /// previous data remains in effect.
    pub fn reload(&self) -> Result<(), PokedexError> {
        let records = self.source.load()?;
        let snapshot = Arc::new(Snapshot::new(records, self.options.cache_capacity));
        log::info!(
            "publishing reference data with categories {:?}",
            snapshot.records.categories()
        );
        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = snapshot;
        if self.options.cache_capacity.is_some() {
            log::debug!("lookup cache invalidated");
        }
        Ok(())
    }

    fn current(&self) -> Arc<Snapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The current snapshot, reloading once if it is missing the category.
    fn loaded(&self, category: Category) -> Result<Arc<Snapshot>, PokedexError> {
        let snapshot = self.current();
        if snapshot.contains(category) {
            return Ok(snapshot);
        }
        log::info!("category {category} is not loaded, reloading reference data");
        self.reload()?;
        let snapshot = self.current();
        if snapshot.contains(category) {
            Ok(snapshot)
        } else {
            Err(PokedexError::CategoryMissing(category.to_string()))
        }
    }

    /// Looks up a resource by ID or name.
    ///
    /// IDs match exactly. Names are normalized first, and if no name matches exactly, the closest
    /// names in the category are returned as [`Lookup::Candidates`].
    pub fn get<Q>(&self, category: Category, query: Q) -> Result<Lookup<AnyResource>, PokedexError>
    where
        Q: Into<Query>,
    {
        let query = query.into();
        let snapshot = self.loaded(category)?;
        if let Some(cached) = snapshot
            .cache
            .as_ref()
            .and_then(|cache| cache.get(category, &query))
        {
            return Ok(cached);
        }
        let result = snapshot.resolve(category, &query, &self.options)?;
        if let Some(cache) = &snapshot.cache {
            cache.save(category, query, result.clone());
        }
        Ok(result)
    }

    fn find<T, Q>(&self, query: Q) -> Result<Lookup<T>, PokedexError>
    where
        T: Resource + TryFrom<AnyResource>,
        Q: Into<Query>,
    {
        Ok(self
            .get(T::CATEGORY, query)?
            .filter_map(|resource| T::try_from(resource).ok()))
    }

    /// Looks up a species by ID or name.
    pub fn get_pokemon<Q>(&self, query: Q) -> Result<Lookup<Species>, PokedexError>
    where
        Q: Into<Query>,
    {
        self.find(query)
    }

    /// Looks up a move by ID or name.
    pub fn get_move<Q>(&self, query: Q) -> Result<Lookup<Move>, PokedexError>
    where
        Q: Into<Query>,
    {
        self.find(query)
    }

    /// Builds every resource in the category, in file order.
    ///
    /// Records that fail to build are logged and skipped.
    pub fn list_all(&self, category: Category) -> Result<Vec<AnyResource>, PokedexError> {
        Ok(self
            .loaded(category)?
            .list(category, |record| AnyResource::from_record(category, record)))
    }

    fn list<T>(&self) -> Result<Vec<T>, PokedexError>
    where
        T: Resource,
    {
        Ok(self.loaded(T::CATEGORY)?.list(T::CATEGORY, T::from_record))
    }

    /// Every species, in file order.
    pub fn all_pokemon(&self) -> Result<Vec<Species>, PokedexError> {
        self.list()
    }

    /// Every move, in file order.
    pub fn all_moves(&self) -> Result<Vec<Move>, PokedexError> {
        self.list()
    }

    /// Every species that can be encountered in the region, in file order.
    pub fn pokemon_in_region(&self, region: Region) -> Result<Vec<Species>, PokedexError> {
        match self.all_pokemon() {
            Ok(species) => Ok(species
                .into_iter()
                .filter(|species| species.appears_in(region))
                .collect()),
            Err(PokedexError::CategoryMissing(_)) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// Names of all loaded categories, sorted.
    ///
    /// Includes categories without a typed model.
    pub fn categories(&self) -> Vec<String> {
        self.current()
            .records
            .categories()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Number of lookup results in the cache.
    pub fn cached_lookups(&self) -> usize {
        self.current()
            .cache
            .as_ref()
            .map(LookupCache::len)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod pokedex_test {
    use std::num::NonZeroUsize;

    use assert_matches::assert_matches;
    use pokedex_data::{
        AnyResource,
        Category,
        ConstructionError,
        RawRecordStore,
        Region,
    };
    use pokedex_test_utils::{
        FakeRecordSource,
        bulbasaur,
        charmander,
        setup_test_environment,
        species,
        standard_moves,
        standard_pokemon,
        standard_store,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{
        Lookup,
        LookupOptions,
        Pokedex,
        PokedexError,
    };

    fn store(pokemon: Vec<pokedex_data::RawRecord>) -> RawRecordStore {
        RawRecordStore::from_iter([
            ("pokemon".to_owned(), pokemon),
            ("moves".to_owned(), standard_moves()),
        ])
    }

    fn pokedex(source: &FakeRecordSource) -> Pokedex {
        setup_test_environment();
        Pokedex::with_source(source.clone(), LookupOptions::default()).unwrap()
    }

    fn cached_pokedex(source: &FakeRecordSource) -> Pokedex {
        setup_test_environment();
        Pokedex::with_source(
            source.clone(),
            LookupOptions {
                cache_capacity: NonZeroUsize::new(8),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn names<T: pokedex_data::Resource>(resources: &[T]) -> Vec<&str> {
        resources.iter().map(|resource| resource.name()).collect()
    }

    #[test]
    fn finds_resource_by_id() {
        let pokedex = pokedex(&FakeRecordSource::new(standard_store()));
        assert_matches!(pokedex.get_move(33u32), Ok(Lookup::Found(mov)) => {
            assert_eq!(mov.name, "tackle");
        });
        assert_matches!(pokedex.get(Category::Pokemon, "4"), Ok(Lookup::Found(resource)) => {
            assert_eq!(resource.name(), "charmander");
            assert_eq!(resource.category(), Category::Pokemon);
        });
    }

    #[test]
    fn does_not_fall_back_to_candidates_for_ids() {
        let pokedex = pokedex(&FakeRecordSource::new(standard_store()));
        assert_eq!(pokedex.get_move(34u32), Ok(Lookup::NotFound));
        assert_eq!(pokedex.get_pokemon("5"), Ok(Lookup::NotFound));
        assert_eq!(pokedex.get_pokemon(u64::MAX), Ok(Lookup::NotFound));
    }

    #[test]
    fn finds_resource_by_normalized_name() {
        let pokedex = pokedex(&FakeRecordSource::new(standard_store()));
        assert_matches!(pokedex.get_pokemon("  Bulbasaur "), Ok(Lookup::Found(species)) => {
            assert_eq!(species.id, 1);
        });
        assert_matches!(pokedex.get_move("Vine Whip"), Ok(Lookup::Found(mov)) => {
            assert_eq!(mov.id, 22);
        });
    }

    #[test]
    fn returns_closest_candidates_for_unknown_name() {
        let pokedex = pokedex(&FakeRecordSource::new(store(vec![
            species(16, "pidgey", &["normal", "flying"], &["kanto"]),
            species(17, "pidgeotto", &["normal", "flying"], &["kanto"]),
            species(18, "pidgeot", &["normal", "flying"], &["kanto"]),
            species(21, "spearow", &["normal", "flying"], &["kanto"]),
        ])));
        assert_matches!(pokedex.get_pokemon("pidgeo"), Ok(Lookup::Candidates(candidates)) => {
            assert_eq!(names(&candidates), vec!["pidgeot", "pidgey", "pidgeotto"]);
        });
        assert_matches!(pokedex.get_pokemon("pidge"), Ok(Lookup::Candidates(candidates)) => {
            assert_eq!(names(&candidates), vec!["pidgey", "pidgeot"]);
        });
        assert_eq!(pokedex.get_pokemon("mewtwo"), Ok(Lookup::NotFound));
        assert_eq!(pokedex.get_pokemon(""), Ok(Lookup::NotFound));
    }

    #[test]
    fn limits_candidates() {
        setup_test_environment();
        let pokedex = Pokedex::with_source(
            FakeRecordSource::new(store(vec![
                species(16, "pidgey", &["normal", "flying"], &["kanto"]),
                species(17, "pidgeotto", &["normal", "flying"], &["kanto"]),
                species(18, "pidgeot", &["normal", "flying"], &["kanto"]),
            ])),
            LookupOptions {
                max_candidates: 1,
                ..Default::default()
            },
        )
        .unwrap();
        assert_matches!(pokedex.get_pokemon("pidgeo"), Ok(Lookup::Candidates(candidates)) => {
            assert_eq!(names(&candidates), vec!["pidgeot"]);
        });
    }

    #[test]
    fn skips_candidates_that_fail_to_build() {
        let mut broken = species(18, "pidgeot", &["normal", "flying"], &["kanto"]);
        broken.remove("sprites");
        let pokedex = pokedex(&FakeRecordSource::new(store(vec![
            species(16, "pidgey", &["normal", "flying"], &["kanto"]),
            broken,
        ])));
        assert_matches!(pokedex.get_pokemon("pidgeo"), Ok(Lookup::Candidates(candidates)) => {
            assert_eq!(names(&candidates), vec!["pidgey"]);
        });
    }

    #[test]
    fn fails_exact_match_that_fails_to_build() {
        let mut broken = charmander();
        broken.insert("growth_rate".to_owned(), json!("glacial"));
        let pokedex = pokedex(&FakeRecordSource::new(store(vec![bulbasaur(), broken])));
        assert_matches!(
            pokedex.get_pokemon("charmander"),
            Err(PokedexError::Construction(ConstructionError::UnrecognizedVocabulary { field, .. })) => {
                assert_eq!(field, "growth_rate");
            }
        );
        assert_matches!(
            pokedex.get(Category::Pokemon, 4u32),
            Err(PokedexError::Construction(_))
        );
    }

    #[test]
    fn treats_numeric_names_as_ids() {
        let pokedex = pokedex(&FakeRecordSource::new(store(vec![
            bulbasaur(),
            species(999, "000", &["normal"], &["paldea"]),
        ])));
        assert_eq!(pokedex.get_pokemon("000"), Ok(Lookup::NotFound));
        assert_matches!(pokedex.get_pokemon("999"), Ok(Lookup::Found(species)) => {
            assert_eq!(species.name, "000");
        });
    }

    #[test]
    fn lists_all_resources_in_file_order() {
        let pokedex = pokedex(&FakeRecordSource::new(standard_store()));
        assert_eq!(
            names(&pokedex.all_pokemon().unwrap()),
            vec!["bulbasaur", "ivysaur", "venusaur", "charmander"]
        );
        assert_eq!(
            names(&pokedex.all_moves().unwrap()),
            vec!["vine-whip", "tackle", "growl", "swift"]
        );
        assert_eq!(
            pokedex
                .list_all(Category::Moves)
                .unwrap()
                .iter()
                .map(AnyResource::id)
                .collect::<Vec<_>>(),
            vec![22, 33, 45, 129]
        );
    }

    #[test]
    fn skips_malformed_records_in_listing() {
        let mut broken = species(7, "squirtle", &["water"], &["kanto"]);
        broken.remove("base_stats");
        let pokedex = pokedex(&FakeRecordSource::new(store(vec![
            bulbasaur(),
            broken,
            charmander(),
        ])));
        assert_eq!(
            names(&pokedex.all_pokemon().unwrap()),
            vec!["bulbasaur", "charmander"]
        );
        assert_eq!(pokedex.list_all(Category::Pokemon).unwrap().len(), 2);
    }

    #[test]
    fn filters_pokemon_by_region() {
        let pokedex = pokedex(&FakeRecordSource::new(standard_store()));
        assert_eq!(
            names(&pokedex.pokemon_in_region(Region::Johto).unwrap()),
            vec!["charmander"]
        );
        assert_eq!(pokedex.pokemon_in_region(Region::Kanto).unwrap().len(), 4);
        assert_eq!(pokedex.pokemon_in_region(Region::Paldea), Ok(Vec::new()));
    }

    #[test]
    fn filters_region_to_empty_without_pokemon() {
        let source = FakeRecordSource::new(RawRecordStore::from_iter([(
            "moves".to_owned(),
            standard_moves(),
        )]));
        let pokedex = pokedex(&source);
        assert_eq!(pokedex.pokemon_in_region(Region::Kanto), Ok(Vec::new()));
    }

    #[test]
    fn reloads_once_for_missing_category() {
        let source = FakeRecordSource::new(RawRecordStore::from_iter([(
            "pokemon".to_owned(),
            standard_pokemon(),
        )]));
        let pokedex = pokedex(&source);
        assert_eq!(source.loads(), 1);

        assert_eq!(
            pokedex.get_move("tackle"),
            Err(PokedexError::CategoryMissing("moves".to_owned()))
        );
        assert_eq!(source.loads(), 2);

        source.set(standard_store());
        assert!(pokedex.get_move("tackle").unwrap().is_found());
        assert_eq!(source.loads(), 3);
        assert!(pokedex.get_move("growl").unwrap().is_found());
        assert_eq!(source.loads(), 3);
    }

    #[test]
    fn loads_lazily_on_first_lookup() {
        setup_test_environment();
        let source = FakeRecordSource::new(standard_store());
        let pokedex = Pokedex::unloaded(source.clone(), LookupOptions::default()).unwrap();
        assert_eq!(source.loads(), 0);
        assert!(pokedex.categories().is_empty());

        assert!(pokedex.get_pokemon(1u32).unwrap().is_found());
        assert!(pokedex.get_pokemon(2u32).unwrap().is_found());
        assert_eq!(source.loads(), 1);
        assert_eq!(pokedex.categories(), vec!["moves", "pokemon"]);
    }

    #[test]
    fn propagates_load_failure_from_lazy_reload() {
        setup_test_environment();
        let pokedex =
            Pokedex::unloaded(FakeRecordSource::failing(), LookupOptions::default()).unwrap();
        assert_matches!(pokedex.get_pokemon(1u32), Err(PokedexError::DataLoad(_)));
        assert_matches!(pokedex.pokemon_in_region(Region::Kanto), Err(PokedexError::DataLoad(_)));
    }

    #[test]
    fn fails_to_create_when_source_fails() {
        setup_test_environment();
        assert_matches!(
            Pokedex::with_source(FakeRecordSource::failing(), LookupOptions::default()),
            Err(PokedexError::DataLoad(err)) => assert_eq!(err.attempts, 1)
        );
    }

    #[test]
    fn keeps_previous_data_when_reload_fails() {
        let source = FakeRecordSource::new(standard_store());
        let pokedex = cached_pokedex(&source);
        assert!(pokedex.get_pokemon("bulbasaur").unwrap().is_found());

        source.fail();
        assert_matches!(pokedex.reload(), Err(PokedexError::DataLoad(_)));
        assert_eq!(pokedex.cached_lookups(), 1);
        assert!(pokedex.get_pokemon("bulbasaur").unwrap().is_found());
    }

    #[test]
    fn caches_lookups() {
        let pokedex = cached_pokedex(&FakeRecordSource::new(standard_store()));
        let first = pokedex.get_pokemon(4u32).unwrap();
        let second = pokedex.get_pokemon(4u32).unwrap();
        assert_eq!(first, second);
        assert_eq!(pokedex.cached_lookups(), 1);
        pokedex.get_pokemon("charmandr").unwrap();
        assert_eq!(pokedex.cached_lookups(), 2);
    }

    #[test]
    fn does_not_serve_stale_results_after_reload() {
        let source = FakeRecordSource::new(standard_store());
        let pokedex = cached_pokedex(&source);
        assert!(pokedex.get_pokemon(4u32).unwrap().is_found());
        assert_eq!(pokedex.cached_lookups(), 1);

        source.set(store(vec![bulbasaur()]));
        pokedex.reload().unwrap();
        assert_eq!(pokedex.cached_lookups(), 0);
        assert_eq!(pokedex.get_pokemon(4u32), Ok(Lookup::NotFound));
        assert_eq!(pokedex.get_pokemon("charmander"), Ok(Lookup::NotFound));
    }

    #[test]
    fn lists_unknown_categories() {
        let pokedex = pokedex(&FakeRecordSource::new(RawRecordStore::from_iter([
            ("pokemon".to_owned(), standard_pokemon()),
            ("moves".to_owned(), standard_moves()),
            ("items".to_owned(), Vec::new()),
        ])));
        assert_eq!(pokedex.categories(), vec!["items", "moves", "pokemon"]);
    }

    #[test]
    fn rejects_invalid_options() {
        assert_matches!(
            Pokedex::unloaded(
                FakeRecordSource::new(standard_store()),
                LookupOptions {
                    fuzzy_cutoff: -0.1,
                    ..Default::default()
                },
            ),
            Err(PokedexError::InvalidConfig(_))
        );
    }
}

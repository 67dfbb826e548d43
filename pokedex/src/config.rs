use std::{
    env,
    fs::File,
    io::BufReader,
    num::NonZeroUsize,
    path::{
        Path,
        PathBuf,
    },
    time::Duration,
};

use pokedex_local_data::LocalRecordSource;
use serde::{
    Deserialize,
    Serialize,
};

use crate::PokedexError;

/// Options for resolving lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOptions {
    /// Minimum similarity ratio for an approximate name match.
    pub fuzzy_cutoff: f64,
    /// Maximum number of approximate matches returned.
    pub max_candidates: usize,
    /// Capacity of the lookup cache. No cache is used if unset.
    pub cache_capacity: Option<NonZeroUsize>,
}

impl LookupOptions {
    pub const DEFAULT_FUZZY_CUTOFF: f64 = 0.6;
    pub const DEFAULT_MAX_CANDIDATES: usize = 3;

    pub fn validate(&self) -> Result<(), PokedexError> {
        if !(0.0..=1.0).contains(&self.fuzzy_cutoff) {
            return Err(PokedexError::InvalidConfig(format!(
                "fuzzy_cutoff must be between 0 and 1, got {}",
                self.fuzzy_cutoff
            )));
        }
        if self.max_candidates == 0 {
            return Err(PokedexError::InvalidConfig(
                "max_candidates must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: Self::DEFAULT_FUZZY_CUTOFF,
            max_candidates: Self::DEFAULT_MAX_CANDIDATES,
            cache_capacity: None,
        }
    }
}

/// Configuration of a [`Pokedex`][`crate::Pokedex`] backed by a local data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokedexConfig {
    /// Directory holding one `<category>.json` file per category.
    pub data_dir: PathBuf,
    /// Number of attempts to load reference data before failing.
    pub max_load_attempts: u32,
    /// Delay between load attempts, in milliseconds.
    pub retry_delay_ms: u64,
    /// Minimum similarity ratio for an approximate name match.
    pub fuzzy_cutoff: f64,
    /// Maximum number of approximate matches returned.
    pub max_candidates: usize,
    /// Capacity of the lookup cache. No cache is used if unset.
    pub cache_capacity: Option<usize>,
}

impl PokedexConfig {
    /// Conventional environment variable for the data directory.
    pub const DATA_DIR_ENV: &'static str = "POKEDEX_DATA_DIR";

    /// Creates a default configuration reading from the given directory.
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a default configuration reading from the directory at the given environment
    /// variable.
    pub fn from_env(env_var: &str) -> Result<Self, PokedexError> {
        env::var(env_var)
            .map(Self::new)
            .map_err(|err| PokedexError::InvalidConfig(format!("{env_var}: {err}")))
    }

    /// Reads a configuration document.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PokedexError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            PokedexError::InvalidConfig(format!("{} could not be opened: {err}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|err| {
            PokedexError::InvalidConfig(format!("{} could not be parsed: {err}", path.display()))
        })
    }

    pub fn validate(&self) -> Result<(), PokedexError> {
        if self.max_load_attempts == 0 {
            return Err(PokedexError::InvalidConfig(
                "max_load_attempts must be at least 1".to_owned(),
            ));
        }
        if self.cache_capacity == Some(0) {
            return Err(PokedexError::InvalidConfig(
                "cache_capacity must be at least 1".to_owned(),
            ));
        }
        self.lookup_options().validate()
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// The record source for the data directory.
    pub fn record_source(&self) -> LocalRecordSource {
        LocalRecordSource::new(&self.data_dir)
            .with_max_attempts(self.max_load_attempts)
            .with_retry_delay(self.retry_delay())
    }

    pub fn lookup_options(&self) -> LookupOptions {
        LookupOptions {
            fuzzy_cutoff: self.fuzzy_cutoff,
            max_candidates: self.max_candidates,
            cache_capacity: self.cache_capacity.and_then(NonZeroUsize::new),
        }
    }
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            max_load_attempts: LocalRecordSource::DEFAULT_MAX_ATTEMPTS,
            retry_delay_ms: 100,
            fuzzy_cutoff: LookupOptions::DEFAULT_FUZZY_CUTOFF,
            max_candidates: LookupOptions::DEFAULT_MAX_CANDIDATES,
            cache_capacity: None,
        }
    }
}

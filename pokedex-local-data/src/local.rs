use std::{
    env,
    ffi::OsStr,
    fs::File,
    io::BufReader,
    path::{
        Path,
        PathBuf,
    },
    thread,
    time::Duration,
};

use anyhow::{
    Context,
    Error,
    Result,
};
use pokedex_data::{
    DataLoadError,
    RawRecord,
    RawRecordStore,
    RecordSource,
};

/// An implementation of [`RecordSource`] that reads all data locally from disk.
///
/// Every `*.json` file directly inside the root directory holds one category, named after the
/// file's base name. Each file must contain a list of objects.
pub struct LocalRecordSource {
    root: PathBuf,
    max_attempts: u32,
    retry_delay: Duration,
}

impl LocalRecordSource {
    /// Extension of category files.
    pub const EXTENSION: &'static str = "json";
    /// Default number of load attempts before giving up.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    /// Default delay between load attempts.
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(100);

    /// Creates a new instance of [`LocalRecordSource`] that reads from the given root directory.
    ///
    /// The directory is not read until [`RecordSource::load`] is called.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
        }
    }

    /// Creates a new instance of [`LocalRecordSource`] that reads from the root directory at the
    /// given environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Ok(Self::new(
            env::var(env_var).context(format!("{env_var} not defined"))?,
        ))
    }

    /// Sets the number of load attempts. At least one attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the delay between load attempts.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// The directory records are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scans the root directory once.
    ///
    /// Files that cannot be read or parsed are logged and skipped. The scan only fails if the
    /// directory cannot be read or no category could be loaded at all.
    fn scan(&self) -> Result<RawRecordStore> {
        let mut paths = self
            .root
            .read_dir()
            .context(format!("failed to read {} directory", self.root.display()))?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| path.is_file())
            .filter(|path| path.extension() == Some(OsStr::new(Self::EXTENSION)))
            .collect::<Vec<_>>();
        paths.sort();

        let store = paths
            .into_iter()
            .filter_map(|path| {
                let path_name = path.to_string_lossy().to_string();
                let category = match path.file_stem().and_then(OsStr::to_str) {
                    Some(category) => category.to_owned(),
                    None => {
                        log::warn!("skipping {path_name}: file name is not valid UTF-8");
                        return None;
                    }
                };
                match Self::read_category_file(&path) {
                    Ok(records) => {
                        log::debug!(
                            "read {} {category} record(s) from {path_name}",
                            records.len()
                        );
                        Some((category, records))
                    }
                    Err(err) => {
                        log::error!("skipping {category} data from {path_name}: {err:#}");
                        None
                    }
                }
            })
            .collect::<RawRecordStore>();

        if store.is_empty() {
            return Err(Error::msg(format!(
                "no categories could be loaded from {}",
                self.root.display()
            )));
        }
        Ok(store)
    }

    fn read_category_file(path: &Path) -> Result<Vec<RawRecord>> {
        let file = File::open(path).context("file could not be opened")?;
        serde_json::from_reader(BufReader::new(file)).context("file is not a list of records")
    }
}

impl RecordSource for LocalRecordSource {
    fn load(&self) -> Result<RawRecordStore, DataLoadError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.scan() {
                Ok(store) => {
                    log::info!(
                        "loaded {} categories from {} on attempt {attempt}",
                        store.len(),
                        self.root.display()
                    );
                    return Ok(store);
                }
                Err(err) if attempt < self.max_attempts => {
                    log::warn!(
                        "load attempt {attempt}/{} failed: {err:#}",
                        self.max_attempts
                    );
                    if !self.retry_delay.is_zero() {
                        thread::sleep(self.retry_delay);
                    }
                }
                Err(err) => {
                    return Err(DataLoadError {
                        root: self.root.clone(),
                        attempts: attempt,
                        reason: format!("{err:#}"),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod local_test {
    use std::{
        fs,
        path::Path,
        time::Duration,
    };

    use assert_matches::assert_matches;
    use pokedex_data::{
        DataLoadError,
        RecordSource,
    };
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::LocalRecordSource;

    fn source(root: &Path) -> LocalRecordSource {
        LocalRecordSource::new(root).with_retry_delay(Duration::ZERO)
    }

    #[test]
    fn loads_every_json_file_as_category() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("moves.json"),
            r#"[{"id": 1, "name": "pound"}, {"id": 2, "name": "karate-chop"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("pokemon.json"), r#"[{"id": 1, "name": "bulbasaur"}]"#)
            .unwrap();
        fs::write(dir.path().join("README.md"), "not data").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let store = source(dir.path()).load().unwrap();
        assert_eq!(store.categories(), vec!["moves", "pokemon"]);
        assert_eq!(
            store
                .get("moves")
                .unwrap()
                .iter()
                .map(|record| record["name"].as_str().unwrap())
                .collect::<Vec<_>>(),
            vec!["pound", "karate-chop"]
        );
    }

    #[test]
    fn skips_unparseable_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("moves.json"), r#"[{"id": 1, "name": "pound"}]"#).unwrap();
        fs::write(dir.path().join("pokemon.json"), r#"[{"id": 1, "name": "#).unwrap();
        fs::write(dir.path().join("items.json"), r#"{"id": 1}"#).unwrap();

        let store = source(dir.path()).load().unwrap();
        assert_eq!(store.categories(), vec!["moves"]);
    }

    #[test]
    fn fails_after_retry_budget_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("missing");
        assert_matches!(
            source(&root).load(),
            Err(DataLoadError { root: failed_root, attempts, reason }) => {
                assert_eq!(failed_root, root);
                assert_eq!(attempts, 3);
                assert!(reason.contains("failed to read"), "{reason}");
            }
        );
    }

    #[test]
    fn fails_when_no_category_loads() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pokemon.json"), "garbage").unwrap();
        assert_matches!(
            source(dir.path()).with_max_attempts(2).load(),
            Err(DataLoadError { attempts, reason, .. }) => {
                assert_eq!(attempts, 2);
                assert!(reason.contains("no categories"), "{reason}");
            }
        );
    }

    #[test]
    fn always_makes_one_attempt() {
        let dir = TempDir::new().unwrap();
        assert_matches!(
            source(&dir.path().join("missing")).with_max_attempts(0).load(),
            Err(DataLoadError { attempts: 1, .. })
        );
    }

    #[test]
    fn reads_root_from_environment() {
        let dir = TempDir::new().unwrap();
        let var = "POKEDEX_LOCAL_DATA_TEST_DIR";
        // SAFETY: No other test reads or writes this variable.
        unsafe { std::env::set_var(var, dir.path()) };
        let source = LocalRecordSource::new_from_env(var).unwrap();
        assert_eq!(source.root(), dir.path());
        assert!(LocalRecordSource::new_from_env("POKEDEX_LOCAL_DATA_UNDEFINED").is_err());
    }
}

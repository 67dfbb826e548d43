use std::{
    path::PathBuf,
    sync::{
        Arc,
        Mutex,
        PoisonError,
        atomic::{
            AtomicU32,
            Ordering,
        },
    },
};

use pokedex_data::{
    DataLoadError,
    RawRecordStore,
    RecordSource,
};

/// A [`RecordSource`] serving an in-memory store that tests can swap out.
///
/// Clones share the same state, so a test can keep a handle after giving the source away.
#[derive(Clone, Default)]
pub struct FakeRecordSource {
    store: Arc<Mutex<Option<RawRecordStore>>>,
    loads: Arc<AtomicU32>,
}

impl FakeRecordSource {
    /// Creates a source that serves the given store.
    pub fn new(store: RawRecordStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(Some(store))),
            loads: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Creates a source that fails every load.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Serves the given store on the next load.
    pub fn set(&self, store: RawRecordStore) {
        *self.store.lock().unwrap_or_else(PoisonError::into_inner) = Some(store);
    }

    /// Fails every subsequent load.
    pub fn fail(&self) {
        *self.store.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Number of loads attempted so far.
    pub fn loads(&self) -> u32 {
        self.loads.load(Ordering::SeqCst)
    }
}

impl RecordSource for FakeRecordSource {
    fn load(&self) -> Result<RawRecordStore, DataLoadError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| DataLoadError {
                root: PathBuf::from("fake"),
                attempts: 1,
                reason: "source is unavailable".to_owned(),
            })
    }
}

mod local;

pub use local::LocalRecordSource;

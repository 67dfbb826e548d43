mod category;
mod raw_record;
mod store;

pub use category::Category;
pub use raw_record::{
    RawRecord,
    RecordReader,
    describe_record,
    record_id,
    record_name,
};
pub use store::{
    RawRecordStore,
    RecordSource,
};

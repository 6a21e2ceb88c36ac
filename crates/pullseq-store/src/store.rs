use std::future::Future;

/// Immediate key-value lookup collaborator: a named table and an integer key
/// map to a record or nothing. Absence is an explicit `None`, never an
/// error.
pub trait RecordStore {
    type Record;

    fn get(&self, table: &str, key: u64) -> Option<Self::Record>;
}

/// Deferred form of [`RecordStore`]; the result of a lookup only becomes
/// available once the returned future resolves.
pub trait DeferredRecordStore {
    type Record;

    fn get(&self, table: &str, key: u64) -> impl Future<Output = Option<Self::Record>>;
}

use std::sync::Mutex;

use crate::model::record::AttendanceRecord;
use crate::store::RecordStore;
use crate::time_api::TimeApi;

/// Shared per-process state handed to every handler.
///
/// The mutex is the coarse write lock: a handler holds it across its whole
/// read-mutate-persist step, so concurrent mutations serialize instead of
/// racing each other into the file.
pub struct AppState {
    pub records: Mutex<Vec<AttendanceRecord>>,
    pub store: RecordStore,
    pub time: TimeApi,
}

impl AppState {
    /// Loads the record list from the store once; the handlers work on this
    /// in-memory copy and write it back in full after every mutation.
    pub fn new(store: RecordStore, time: TimeApi) -> Self {
        let records = Mutex::new(store.load());
        Self {
            records,
            store,
            time,
        }
    }
}

//! Best-record persistence.
//!
//! One key in a key-value store holds the best finished run as JSON,
//! `{"moves": .., "seconds": ..}`. Anything wrong with that key (missing
//! store, unreadable value, malformed JSON) means "no record"; it is logged
//! and never surfaces as an error.

mod best;
mod keeper;
mod store;

pub use best::{BestRecord, RecordStatus};
pub use keeper::{BestRecordKeeper, RecordError};
pub use store::{MemoryStore, RecordStore, StoreError};

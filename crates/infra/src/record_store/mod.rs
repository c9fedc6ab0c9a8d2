//! Record store boundary.
//!
//! The dashboard only ever needs two read shapes from the hosted document
//! database ("everything in a collection" and "most recent N by a field") plus
//! a point read/write for profile documents. Both capability traits make no
//! storage assumptions; [`InMemoryRecordStore`] backs tests and dev runs.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use r#trait::{DocumentStore, FetchError, RecordStore};

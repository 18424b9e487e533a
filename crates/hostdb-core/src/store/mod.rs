// # Store
//
// The dual-indexed record table and its file persistence.

pub mod file;
pub mod index;

pub use file::HostStore;
pub use index::RecordIndex;

// # hostdb-core
//
// Core library for hostdb, a small authoritative name/address store.
//
// ## Architecture Overview
//
// - **Record**: validated `IpAddress` / `QualifiedName` pair
// - **HostStore**: dual-indexed table persisted to a flat text file
// - **Command**: one parsed request, run against the store
// - **Dispatcher**: turns an input line into a `Command`
// - **Session**: the read/dispatch/print loop
//
// Data flows one way: line → Dispatcher → Command → HostStore → text.
// Everything is synchronous and single-threaded.
//
// ## Design Principles
//
// 1. **Uniqueness on both keys**: no two records share an address or a name
// 2. **Commit after write**: an add reaches memory only once it is on disk
// 3. **Deterministic file**: the backing file is always sorted line by line
// 4. **Library-First**: the binary only wires configuration to a `Session`

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod record;
pub mod session;
pub mod store;
pub mod traits;

// Re-export core types for convenience
pub use command::{Command, Outcome};
pub use config::{HostDbConfig, SessionConfig, StoreConfig};
pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use record::{IpAddress, QualifiedName, Record};
pub use session::{Session, SessionEnd};
pub use store::HostStore;
pub use traits::OutputSink;

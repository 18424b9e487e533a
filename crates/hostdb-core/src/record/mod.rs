//! Record types
//!
//! - [`IpAddress`]: validated dotted-quad literal
//! - [`QualifiedName`]: validated `host.domain` name
//! - [`Record`]: one (address, name) association

pub mod address;
pub mod name;

pub use address::{IpAddress, is_valid_address};
pub use name::{QualifiedName, is_valid_name};

use std::fmt;

/// One association between an IP address and a qualified name
///
/// Records are immutable once built; the store hands out shared references
/// and never edits them in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    ip: IpAddress,
    name: QualifiedName,
}

impl Record {
    /// Create a record from already validated parts
    pub fn new(ip: IpAddress, name: QualifiedName) -> Self {
        Self { ip, name }
    }

    /// The IP address
    pub fn ip(&self) -> &IpAddress {
        &self.ip
    }

    /// The qualified name
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }
}

/// Renders as `<ip> <name>`, the listing format.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ip, self.name)
    }
}

// # Record Index
//
// In-memory dual index over the records of a store.
//
// Records live once in an arena (`Vec<Record>`); the two lookup maps store
// arena positions, so a record is reachable from both keys or from
// neither. Nothing is ever removed, so positions stay valid for the life of
// the index.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::record::{IpAddress, QualifiedName, Record};

/// Dual-keyed record table with uniqueness on both keys
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    records: Vec<Record>,
    by_ip: HashMap<IpAddress, usize>,
    by_name: HashMap<QualifiedName, usize>,
}

impl RecordIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get_by_ip(&self, ip: &IpAddress) -> Option<&Record> {
        self.by_ip.get(ip).map(|&slot| &self.records[slot])
    }

    pub fn get_by_name(&self, name: &QualifiedName) -> Option<&Record> {
        self.by_name.get(name).map(|&slot| &self.records[slot])
    }

    /// Fail if either key is already taken
    ///
    /// The address is checked first, so a pair that collides on both keys
    /// reports `DuplicateIp`.
    pub fn check_unique(&self, ip: &IpAddress, name: &QualifiedName) -> Result<()> {
        if self.by_ip.contains_key(ip) {
            return Err(Error::DuplicateIp(ip.clone()));
        }
        if self.by_name.contains_key(name) {
            return Err(Error::DuplicateName(name.clone()));
        }
        Ok(())
    }

    /// Insert a record under both keys
    ///
    /// Nothing is modified when either key is taken.
    pub fn insert(&mut self, record: Record) -> Result<&Record> {
        self.check_unique(record.ip(), record.name())?;

        let slot = self.records.len();
        self.by_ip.insert(record.ip().clone(), slot);
        self.by_name.insert(record.name().clone(), slot);
        self.records.push(record);

        Ok(&self.records[slot])
    }

    /// Records whose domain equals `domain` exactly
    ///
    /// Sorted by host when `sort_by_ip` is false, by the textual address
    /// otherwise.
    pub fn in_domain(&self, domain: &str, sort_by_ip: bool) -> Vec<&Record> {
        let mut matches: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| record.name().domain() == domain)
            .collect();

        if sort_by_ip {
            matches.sort_by(|a, b| a.ip().as_str().cmp(b.ip().as_str()));
        } else {
            matches.sort_by(|a, b| a.name().host().cmp(b.name().host()));
        }

        matches
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

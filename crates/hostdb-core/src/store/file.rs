// # Host Store
//
// File-backed record store.
//
// ## Purpose
//
// Owns the dual-indexed record table and keeps the backing file in step
// with it. The file is read once when the store is opened and rewritten in
// full after every successful add; no handle is held between operations.
//
// ## File Format
//
// ```text
// # comment lines and blank lines are ignored
// ecampus.uvsq.fr 193.51.25.12
// www.uvsq.fr 193.51.31.90
// ```
//
// One `<qualified-name> <ip>` pair per line, separated by any run of
// whitespace. On load, lines that do not hold exactly two tokens, or whose
// tokens fail validation, or that reuse an address or name already loaded,
// are dropped without an error. On save, every record is written as
// `<name> <ip>` and the lines are sorted as whole strings.
//
// ## Durability
//
// - Writes go to a sibling `.tmp` file which is synced and then renamed
//   over the backing file, so a reader never observes a half-written table.
// - An add is committed to memory only after the write succeeded. A failed
//   write leaves the store exactly as it was.
// - One store per process; concurrent writers are not detected.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::iter;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::record::{IpAddress, QualifiedName, Record};
use crate::store::index::RecordIndex;

/// File-backed, dual-indexed record store
///
/// # Example
///
/// ```rust,no_run
/// use hostdb_core::store::HostStore;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut store = HostStore::open("/var/lib/hostdb/hosts.txt")?;
///
///     // Persisted before returning
///     store.add("193.51.25.24".parse()?, "pikachu.uvsq.fr".parse()?)?;
///
///     let record = store.lookup_by_ip(&"193.51.25.24".parse()?);
///     assert_eq!(record.map(|r| r.name().as_str()), Some("pikachu.uvsq.fr"));
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct HostStore {
    path: PathBuf,
    index: RecordIndex,
}

/// Why a load line was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    TokenCount,
    InvalidName,
    InvalidAddress,
    Conflict,
}

impl HostStore {
    /// Open a store, loading records from `path`
    ///
    /// A missing file gives an empty store. The parent directory is created
    /// if needed so the first add can write the file.
    ///
    /// # Errors
    ///
    /// `Error::Persistence` when an existing file cannot be read. Malformed
    /// content never fails the load.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                Error::persistence(format!(
                    "failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let index = Self::load(&path)?;

        Ok(Self { path, index })
    }

    fn load(path: &Path) -> Result<RecordIndex> {
        let mut index = RecordIndex::new();

        if !path.exists() {
            debug!("Database file does not exist: {}", path.display());
            return Ok(index);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::persistence(format!(
                "failed to read database file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut skipped = 0usize;
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let outcome = parse_line(line).and_then(|record| {
                index
                    .insert(record)
                    .map(|_| ())
                    .map_err(|_| SkipReason::Conflict)
            });

            if let Err(reason) = outcome {
                skipped += 1;
                trace!("Skipping line {} of {}: {:?}", number + 1, path.display(), reason);
            }
        }

        debug!(
            "Loaded {} record(s) from {} ({} line(s) skipped)",
            index.len(),
            path.display(),
            skipped
        );

        Ok(index)
    }

    /// Backing file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over all records in load/insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.index.iter()
    }

    /// Exact lookup by address
    pub fn lookup_by_ip(&self, ip: &IpAddress) -> Option<&Record> {
        self.index.get_by_ip(ip)
    }

    /// Exact lookup by qualified name
    pub fn lookup_by_name(&self, name: &QualifiedName) -> Option<&Record> {
        self.index.get_by_name(name)
    }

    /// Records in `domain`, sorted by host or by textual address
    ///
    /// `domain` must equal the part after the first dot exactly; `uvsq.fr`
    /// does not match `www.cs.uvsq.fr`.
    pub fn list_domain(&self, domain: &str, sort_by_ip: bool) -> Vec<&Record> {
        self.index.in_domain(domain, sort_by_ip)
    }

    /// Add a record and persist the whole table
    ///
    /// # Errors
    ///
    /// - `Error::DuplicateIp` / `Error::DuplicateName` when a key is taken
    /// - `Error::Persistence` when the file could not be written; the
    ///   record is then not added
    pub fn add(&mut self, ip: IpAddress, name: QualifiedName) -> Result<()> {
        self.index.check_unique(&ip, &name)?;

        let record = Record::new(ip, name);
        let lines = render_lines(self.index.iter().chain(iter::once(&record)));

        if let Err(e) = self.write_lines(&lines) {
            warn!("Not adding {}: {}", record, e);
            return Err(e);
        }

        let added = self.index.insert(record)?.to_string();
        info!("Added {} ({} record(s))", added, self.index.len());
        Ok(())
    }

    /// Rewrite the backing file from the current table
    pub fn save(&self) -> Result<()> {
        self.write_lines(&render_lines(self.index.iter()))
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        let temp_path = self.temp_path();
        if let Err(e) = write_synced(&temp_path, content.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(Error::persistence(format!(
                "failed to write database file {}: {}",
                temp_path.display(),
                e
            )));
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            Error::persistence(format!(
                "failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        trace!("Database written to {}", self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("hostdb"));
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Parse a trimmed, non-comment line: `<name> <ip>`
fn parse_line(line: &str) -> std::result::Result<Record, SkipReason> {
    let mut tokens = line.split_whitespace();
    let (Some(name), Some(ip), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(SkipReason::TokenCount);
    };

    let name = QualifiedName::new(name).map_err(|_| SkipReason::InvalidName)?;
    let ip = IpAddress::new(ip).map_err(|_| SkipReason::InvalidAddress)?;

    Ok(Record::new(ip, name))
}

/// `<name> <ip>` lines sorted as whole strings
fn render_lines<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<String> {
    let mut lines: Vec<String> = records
        .map(|record| format!("{} {}", record.name(), record.ip()))
        .collect();
    lines.sort();
    lines
}

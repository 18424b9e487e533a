//! Common test utilities for contract tests
//!
//! Seeds backing files in scratch directories so every test starts from a
//! known table.

#![allow(dead_code)]

use hostdb_core::HostStore;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The three-machine table used throughout the contract tests
pub const UVSQ: &str = "\
www.uvsq.fr 193.51.31.90
ecampus.uvsq.fr 193.51.25.12
poste.uvsq.fr 193.51.31.154
";

/// A backing file inside a directory that lives as long as the fixture
pub struct Fixture {
    /// Keeps the directory alive
    pub dir: TempDir,
    /// Backing file path
    pub path: PathBuf,
}

impl Fixture {
    /// Seed a backing file with `content`
    pub fn with_content(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("hosts.txt");
        fs::write(&path, content).expect("seed backing file");
        Self { dir, path }
    }

    /// A path whose file does not exist yet
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("hosts.txt");
        Self { dir, path }
    }

    /// Open a store on the backing file
    pub fn open(&self) -> HostStore {
        HostStore::open(&self.path).expect("open store")
    }

    /// Current file content
    pub fn content(&self) -> String {
        read(&self.path)
    }
}

/// Read a file to a string
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read backing file")
}

/// Non-comment, non-blank lines of a file, sorted
pub fn record_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    lines.sort();
    lines
}

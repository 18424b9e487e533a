// # Qualified Machine Name
//
// A `host.domain` pair. The split happens at the first dot only, so
// `www.cs.uvsq.fr` has host `www` and domain `cs.uvsq.fr`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Validated, trimmed `host.domain` name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    text: String,
    /// Byte offset of the first `.`
    dot: usize,
}

impl QualifiedName {
    /// Validate and wrap a qualified name
    ///
    /// Surrounding whitespace is trimmed. The name is rejected when it is
    /// empty, has no dot, ends at its first dot or contains whitespace
    /// inside it. An empty host (`.uvsq.fr`) is accepted.
    pub fn new(input: &str) -> Result<Self> {
        let text = input.trim();
        if text.is_empty() {
            return Err(Error::invalid_format("machine name cannot be empty"));
        }

        let dot = text.find('.').ok_or_else(|| {
            Error::invalid_format(format!(
                "machine name must be qualified (contain at least one dot): {text}"
            ))
        })?;

        if dot + 1 == text.len() {
            return Err(Error::invalid_format(format!(
                "machine name has an empty domain part: {text}"
            )));
        }
        if text.chars().any(char::is_whitespace) {
            return Err(Error::invalid_format(format!(
                "machine name cannot contain whitespace: {text}"
            )));
        }

        Ok(Self {
            text: text.to_string(),
            dot,
        })
    }

    /// Part before the first dot
    pub fn host(&self) -> &str {
        &self.text[..self.dot]
    }

    /// Part after the first dot
    pub fn domain(&self) -> &str {
        &self.text[self.dot + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Check a name without allocating
pub fn is_valid_name(input: &str) -> bool {
    let text = input.trim();
    match text.find('.') {
        Some(dot) => dot + 1 < text.len() && !text.chars().any(char::is_whitespace),
        None => false,
    }
}

impl FromStr for QualifiedName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

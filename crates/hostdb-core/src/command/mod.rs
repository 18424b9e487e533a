//! Commands
//!
//! A [`Command`] is one parsed request, carrying its validated operands.
//! Running it against a [`HostStore`] always produces an [`Outcome`]: the
//! normal failure cases (unknown address, unknown name, empty domain,
//! duplicate key, failed write) come back as display text starting with
//! [`ERROR_PREFIX`], never as a Rust error.

use std::fmt::Display;

use tracing::debug;

use crate::record::{IpAddress, QualifiedName};
use crate::store::HostStore;

/// Prefix of every user-facing error line
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Format an error for display
pub fn error_line(message: impl Display) -> String {
    format!("{ERROR_PREFIX}{message}")
}

/// One unit of work against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reverse lookup: address to name
    LookupByIp(IpAddress),

    /// Forward lookup: name to address
    LookupByName(QualifiedName),

    /// List the machines of a domain
    ListDomain {
        /// Domain to match exactly
        domain: String,
        /// Sort by textual address instead of host name
        sort_by_ip: bool,
    },

    /// Insert a new association
    Add {
        ip: IpAddress,
        name: QualifiedName,
    },

    /// End the session
    Quit,
}

/// Result of running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user
    Display(String),
    /// Stop reading input
    Terminate,
}

impl Outcome {
    /// The display text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Outcome::Display(text) => Some(text),
            Outcome::Terminate => None,
        }
    }
}

impl Command {
    /// Run the command
    ///
    /// Only `Add` mutates the store.
    pub fn execute(&self, store: &mut HostStore) -> Outcome {
        match self {
            Command::LookupByIp(ip) => Outcome::Display(match store.lookup_by_ip(ip) {
                Some(record) => record.name().to_string(),
                None => error_line(format!("no machine found for IP address {ip}")),
            }),

            Command::LookupByName(name) => Outcome::Display(match store.lookup_by_name(name) {
                Some(record) => record.ip().to_string(),
                None => error_line(format!("no IP address found for {name}")),
            }),

            Command::ListDomain { domain, sort_by_ip } => {
                let records = store.list_domain(domain, *sort_by_ip);
                if records.is_empty() {
                    return Outcome::Display(error_line(format!(
                        "no machines found in domain {domain}"
                    )));
                }

                let lines: Vec<String> = records.iter().map(|record| record.to_string()).collect();
                Outcome::Display(lines.join("\n"))
            }

            Command::Add { ip, name } => match store.add(ip.clone(), name.clone()) {
                Ok(()) => Outcome::Display(format!("added entry: {ip} {name}")),
                Err(e) => {
                    debug!("add {} {} rejected: {}", ip, name, e);
                    Outcome::Display(error_line(e))
                }
            },

            Command::Quit => Outcome::Terminate,
        }
    }
}

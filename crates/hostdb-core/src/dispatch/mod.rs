//! Line dispatcher
//!
//! Turns one input line into a [`Command`].
//!
//! ## Classification
//!
//! The line is split on whitespace and the first token decides, in order:
//!
//! 1. `quit` → [`Command::Quit`]
//! 2. `ls [-a] <domain>` → [`Command::ListDomain`]
//! 3. `add <ip> <qualified-name>` → [`Command::Add`]
//! 4. an IP literal → [`Command::LookupByIp`]
//! 5. a qualified name → [`Command::LookupByName`]
//! 6. anything else is an unrecognized command
//!
//! Keywords are matched case-insensitively; the `-a` flag is not. Tokens
//! after a lookup key are ignored.

use tracing::debug;

use crate::command::{Command, error_line};
use crate::error::{Error, Result};
use crate::record::{IpAddress, QualifiedName, is_valid_address, is_valid_name};
use crate::traits::OutputSink;

const LIST_USAGE: &str = "ls [-a] <domain>";
const ADD_USAGE: &str = "add <ip> <qualified-name>";

/// Stateless line parser
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Create a dispatcher
    pub fn new() -> Self {
        Self
    }

    /// Classify a line
    ///
    /// # Errors
    ///
    /// - `Error::Usage` for `ls`/`add` with the wrong shape, or a blank line
    /// - `Error::InvalidFormat` for `add` with a bad address or name
    /// - `Error::UnrecognizedCommand` when nothing matches
    pub fn parse(&self, line: &str) -> Result<Command> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&keyword) = tokens.first() else {
            return Err(Error::usage("empty command"));
        };

        if keyword.eq_ignore_ascii_case("quit") {
            return Ok(Command::Quit);
        }
        if keyword.eq_ignore_ascii_case("ls") {
            return parse_list(&tokens);
        }
        if keyword.eq_ignore_ascii_case("add") {
            return parse_add(&tokens);
        }

        if is_valid_address(keyword) {
            return Ok(Command::LookupByIp(IpAddress::new(keyword)?));
        }
        if is_valid_name(keyword) {
            return Ok(Command::LookupByName(QualifiedName::new(keyword)?));
        }

        Err(Error::unrecognized(keyword))
    }

    /// Classify a line, reporting failures on `sink`
    ///
    /// Returns `Ok(None)` after writing `ERROR: <reason>` when the line
    /// does not yield a command; the caller just moves on to the next
    /// line. `Err` only comes from the sink itself.
    pub fn next_command<S: OutputSink + ?Sized>(
        &self,
        line: &str,
        sink: &mut S,
    ) -> Result<Option<Command>> {
        match self.parse(line) {
            Ok(command) => Ok(Some(command)),
            Err(e) => {
                debug!("Rejected line {:?}: {}", line, e);
                sink.emit(&error_line(e))?;
                Ok(None)
            }
        }
    }
}

fn parse_list(tokens: &[&str]) -> Result<Command> {
    match tokens {
        [_, domain] => Ok(Command::ListDomain {
            domain: (*domain).to_string(),
            sort_by_ip: false,
        }),
        [_, "-a", domain] => Ok(Command::ListDomain {
            domain: (*domain).to_string(),
            sort_by_ip: true,
        }),
        _ => Err(Error::usage(LIST_USAGE)),
    }
}

fn parse_add(tokens: &[&str]) -> Result<Command> {
    let [_, ip, name] = tokens else {
        return Err(Error::usage(ADD_USAGE));
    };

    Ok(Command::Add {
        ip: IpAddress::new(ip)?,
        name: QualifiedName::new(name)?,
    })
}

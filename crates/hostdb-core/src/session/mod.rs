// # Session
//
// The driver loop: read a line, dispatch it, run the command, print the
// result, until `quit` or end of input.
//
// ## Output
//
// - Optional banner listing the commands
// - `prompt` before every read (no newline)
// - One result per accepted command; parse errors are printed by the
//   dispatcher instead
// - `Goodbye!` after `quit`
//
// Everything runs on the calling thread, one line at a time.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::command::Outcome;
use crate::config::SessionConfig;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::store::HostStore;
use crate::traits::OutputSink;

const BANNER: &str = "\
hostdb - type 'quit' to exit
Commands:
  <qualified.name>           show the IP address
  <ip.address>               show the qualified name
  ls [-a] <domain>           list the machines of a domain
  add <ip> <qualified.name>  add an entry
  quit                       exit
";

const GOODBYE: &str = "Goodbye!";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user entered `quit`
    Quit,
    /// The line source ran dry
    EndOfInput,
}

/// Interactive loop over a line source and an output sink
pub struct Session<R, W> {
    store: HostStore,
    dispatcher: Dispatcher,
    config: SessionConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over an opened store
    pub fn new(store: HostStore, input: R, output: W, config: SessionConfig) -> Self {
        Self {
            store,
            dispatcher: Dispatcher::new(),
            config,
            input,
            output,
        }
    }

    /// Run until `quit` or end of input
    ///
    /// # Errors
    ///
    /// Only I/O failures of the line source or the sink. Command failures
    /// are printed and the loop continues.
    pub fn run(&mut self) -> Result<SessionEnd> {
        if self.config.banner {
            self.output.emit(BANNER)?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                return Ok(SessionEnd::EndOfInput);
            }

            if let Some(end) = self.handle_line(&line)? {
                return Ok(end);
            }
        }
    }

    /// Process one raw line
    ///
    /// Returns `Some` when the session should stop.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<SessionEnd>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let Some(command) = self.dispatcher.next_command(line, &mut self.output)? else {
            return Ok(None);
        };

        match command.execute(&mut self.store) {
            Outcome::Display(text) => {
                self.output.emit(&text)?;
                Ok(None)
            }
            Outcome::Terminate => {
                self.output.emit(GOODBYE)?;
                Ok(Some(SessionEnd::Quit))
            }
        }
    }

    /// The store this session works on
    pub fn store(&self) -> &HostStore {
        &self.store
    }

    /// Take back the store and the sink
    pub fn into_parts(self) -> (HostStore, W) {
        (self.store, self.output)
    }
}

// # Output Sink Trait
//
// Where command results and dispatcher errors go.
//
// ## Purpose
//
// The dispatcher reports malformed lines itself, at parse time, instead of
// handing an error back to the driver loop. It needs somewhere to write to
// without knowing whether that is a terminal, a pipe or a test buffer.
//
// ## Implementations
//
// Every `std::io::Write` is a sink: stdout, files, `Vec<u8>` in tests.

use std::io::{self, Write};

/// Line-oriented text sink
pub trait OutputSink {
    /// Write one result, followed by a newline
    ///
    /// Multi-line results (domain listings) are written as they are; the
    /// sink only appends the final newline.
    fn emit(&mut self, text: &str) -> io::Result<()>;
}

impl<W: Write> OutputSink for W {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        writeln!(self, "{text}")?;
        self.flush()
    }
}

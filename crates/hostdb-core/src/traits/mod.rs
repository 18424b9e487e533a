//! Core traits for hostdb
//!
//! - [`OutputSink`]: where results and parse errors are written

pub mod output_sink;

pub use output_sink::OutputSink;

//! Indented plain-text formatter
//!
//! `IndentedFormatter` writes one line per node as the walker reports it:
//! the indent for its depth, the name, and a trailing `/` for directories.

use std::io::Write;
use std::path::PathBuf;

use crate::error::{Result, TreeError};
use crate::tree::{StreamingOutput, WalkSummary};

use super::config::OutputConfig;

/// Streaming formatter writing the indented listing to any `Write`.
pub struct IndentedFormatter<W: Write> {
    config: OutputConfig,
    writer: W,
    /// Where the writer points, used to label write errors.
    destination: PathBuf,
}

impl<W: Write> IndentedFormatter<W> {
    pub fn new(writer: W, config: OutputConfig, destination: impl Into<PathBuf>) -> Self {
        Self {
            config,
            writer,
            destination: destination.into(),
        }
    }

    /// Flush whatever has been buffered so far.
    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| TreeError::output(&self.destination, e))
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StreamingOutput for IndentedFormatter<W> {
    fn output_node(&mut self, name: &str, is_dir: bool, depth: usize) -> Result<()> {
        let suffix = if is_dir { "/" } else { "" };
        writeln!(
            self.writer,
            "{}{}{}",
            self.config.indent(depth),
            name,
            suffix
        )
        .map_err(|e| TreeError::output(&self.destination, e))
    }

    fn finish(&mut self, _summary: &WalkSummary) -> Result<()> {
        self.flush()
    }
}

//! TreeWriter - writes a directory listing to a file

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, TreeError};
use crate::output::{IndentedFormatter, OutputConfig};
use crate::tree::{TreeWalker, WalkSummary};

/// File the listing goes to when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "structura_proiectului.txt";

/// Walks a directory and writes its indented listing.
#[derive(Debug, Clone, Default)]
pub struct TreeWriter {
    config: OutputConfig,
    walker: TreeWalker,
}

impl TreeWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            walker: TreeWalker::new(),
        }
    }

    /// Write the listing of `root` to `output`, replacing any existing content.
    ///
    /// The output file is created before the walk starts, so a missing root
    /// still leaves an empty file behind. On failure the file keeps whatever
    /// was written before the error.
    pub fn write(&self, root: &Path, output: &Path) -> Result<WalkSummary> {
        info!(root = %root.display(), output = %output.display(), "writing tree");

        let file = File::create(output).map_err(|e| TreeError::output(output, e))?;
        let summary = self.write_to(root, BufWriter::new(file), output)?;

        info!(
            directories = summary.directories,
            files = summary.files,
            "tree written"
        );
        Ok(summary)
    }

    /// Stream the listing of `root` into `writer`. `label` names the writer
    /// in error messages.
    pub fn write_to<W: Write>(
        &self,
        root: &Path,
        writer: W,
        label: &Path,
    ) -> Result<WalkSummary> {
        let mut formatter = IndentedFormatter::new(writer, self.config.clone(), label);
        match self.walker.walk_streaming(root, &mut formatter) {
            Ok(summary) => Ok(summary),
            Err(e) => {
                if let Err(flush_err) = formatter.flush() {
                    warn!(error = %flush_err, "could not flush partial listing");
                }
                Err(e)
            }
        }
    }

    /// Build the listing of `root` in memory.
    pub fn render(&self, root: &Path) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(root, &mut buf, Path::new("<memory>"))?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Write the listing of `root` to `output` with the default layout.
pub fn write_tree(root: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<WalkSummary> {
    TreeWriter::default().write(root.as_ref(), output.as_ref())
}

/// Write the listing of `root` to [`DEFAULT_OUTPUT_FILE`] in the working directory.
pub fn write_tree_default(root: impl AsRef<Path>) -> Result<WalkSummary> {
    write_tree(root, DEFAULT_OUTPUT_FILE)
}

/// Return the listing of `root` as a string.
pub fn render_tree(root: impl AsRef<Path>) -> Result<String> {
    TreeWriter::default().render(root.as_ref())
}

//! TreeWalker - streams a pre-order listing of a directory tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TreeError};

use super::utils::{display_name, lossy};

/// Callback for streaming output - receives each node in pre-order.
pub trait StreamingOutput {
    /// Called once per node. `depth` is 0 for the root directory.
    fn output_node(&mut self, name: &str, is_dir: bool, depth: usize) -> Result<()>;

    /// Called once after the whole tree has been emitted.
    fn finish(&mut self, summary: &WalkSummary) -> Result<()>;
}

/// Number of nodes emitted by a walk. The root counts as a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
}

/// Depth-first, top-down tree walker.
///
/// For each directory the walker emits the directory itself, then every
/// non-directory entry in it, then descends into the subdirectories. Entries
/// keep the order `read_dir` reports them in. Symlinks are never followed:
/// links to directories are left out, other links are emitted as files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and stream every node to `output`.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkSummary> {
        check_root(root)?;

        let mut summary = WalkSummary::default();
        self.walk_dir(root, &display_name(root), 0, output, &mut summary)?;
        output.finish(&summary)?;
        Ok(summary)
    }

    fn walk_dir<O: StreamingOutput>(
        &self,
        path: &Path,
        name: &str,
        depth: usize,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        debug!(path = %path.display(), depth, "entering directory");

        output.output_node(name, true, depth)?;
        summary.directories += 1;

        let entries = fs::read_dir(path).map_err(|e| TreeError::traversal(path, e))?;

        let mut subdirs: Vec<(String, PathBuf)> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TreeError::traversal(path, e))?;
            // file_type() does not follow symlinks
            let file_type = entry
                .file_type()
                .map_err(|e| TreeError::traversal(entry.path(), e))?;
            let entry_name = lossy(&entry.file_name());

            if file_type.is_dir() {
                subdirs.push((entry_name, entry.path()));
            } else if file_type.is_symlink() && points_to_dir(&entry.path()) {
                debug!(path = %entry.path().display(), "skipping directory symlink");
            } else {
                output.output_node(&entry_name, false, depth + 1)?;
                summary.files += 1;
            }
        }

        for (sub_name, sub_path) in subdirs {
            self.walk_dir(&sub_path, &sub_name, depth + 1, output, summary)?;
        }

        Ok(())
    }
}

/// Whether a symlink resolves to a directory. Broken or looping links don't.
fn points_to_dir(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}

fn check_root(root: &Path) -> Result<()> {
    let metadata = match fs::metadata(root) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(TreeError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        Err(e) => return Err(TreeError::traversal(root, e)),
    };

    if !metadata.is_dir() {
        return Err(TreeError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    Ok(())
}

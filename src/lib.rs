//! Structura - writes an indented listing of a directory tree to a text file

pub mod error;
pub mod output;
pub mod tree;
pub mod writer;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{IndentedFormatter, OutputConfig};
pub use tree::{StreamingOutput, TreeWalker, WalkSummary};
pub use writer::{DEFAULT_OUTPUT_FILE, TreeWriter, render_tree, write_tree, write_tree_default};

//! Directory tree walking logic
//!
//! `TreeWalker` visits a directory tree depth-first in pre-order and hands
//! every node to a `StreamingOutput` sink as it goes, so nothing but the
//! entries of the directories on the current path is held in memory.

mod utils;
mod walker;

pub use walker::{StreamingOutput, TreeWalker, WalkSummary};

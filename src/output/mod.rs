//! Output formatting for tree listings

mod config;
mod text;

pub use config::OutputConfig;
pub use text::IndentedFormatter;

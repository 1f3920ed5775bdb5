//! jls - `ls` over a directory tree described by a JSON document

pub mod command;
pub mod config;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use command::{Outcome, run};
pub use config::{DEFAULT_INPUT, ListConfig};
pub use error::{Error, Result};
pub use output::{format_mod_time, format_size_human, select_entries, write_listing};
pub use tree::{EntryKind, Node, load_tree, navigate, parse_tree};

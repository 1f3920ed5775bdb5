//! Listing configuration

use std::path::PathBuf;

use crate::tree::EntryKind;

/// Input document read when `--input` is not given.
pub const DEFAULT_INPUT: &str = "structure.json";

/// Everything a single `jls` run needs, built from the command line.
#[derive(Debug, Clone)]
pub struct ListConfig {
    pub input_path: PathBuf,
    /// Path inside the tree to list. `None` lists the root.
    pub target_path: Option<String>,
    pub show_all: bool,
    pub long_format: bool,
    /// Reverse the listing. Under `sort_by_time` this selects oldest-first.
    pub reverse: bool,
    /// Sort by modification time, newest first.
    pub sort_by_time: bool,
    pub filter_by: Option<EntryKind>,
    /// Human-readable sizes in long format.
    pub human_readable: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            target_path: None,
            show_all: false,
            long_format: false,
            reverse: false,
            sort_by_time: false,
            filter_by: None,
            human_readable: false,
        }
    }
}

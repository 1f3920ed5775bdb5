//! Reading the tree from its JSON document

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::node::Node;

/// Read and decode the JSON document at `path`.
pub fn load_tree(path: &Path) -> Result<Node> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root = parse_tree(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} nodes from {}", root.count(), path.display());
    Ok(root)
}

/// Decode a tree from JSON text.
pub fn parse_tree(text: &str) -> serde_json::Result<Node> {
    serde_json::from_str(text)
}

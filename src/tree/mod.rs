//! The JSON-described tree
//!
//! - `node` - `Node` and its decoding from JSON
//! - `load` - reading the input document
//! - `navigate` - resolving a `/`-separated path to a subtree

mod load;
mod navigate;
mod node;

pub use load::{load_tree, parse_tree};
pub use navigate::{navigate, not_found_message};
pub use node::{EntryKind, Node};

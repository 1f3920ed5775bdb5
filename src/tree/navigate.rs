//! Path navigation through the tree

use super::node::Node;

/// Follow a `/`-separated path from `root`.
///
/// Each segment must exactly match the name of a child of the current node;
/// the first matching child wins. Empty segments are matched literally, so a
/// leading, trailing or doubled slash normally yields `None`. Files have no
/// children, so any segment after a file fails.
pub fn navigate<'a>(root: &'a Node, path: &str) -> Option<&'a Node> {
    let mut current = root;
    for segment in path.split('/') {
        current = current
            .children()
            .iter()
            .find(|child| child.name() == segment)?;
    }
    Some(current)
}

/// Message printed when `path` cannot be resolved.
pub fn not_found_message(path: &str) -> String {
    format!("error: cannot access '{}': No such file or directory", path)
}

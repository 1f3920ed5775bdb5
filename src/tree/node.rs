//! JSON tree node types

use serde::Deserialize;

/// Kind of entry, used by `--filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EntryKind {
    /// Entries without a `contents` field
    File,
    /// Entries with a `contents` field
    Dir,
}

/// One file or directory in the JSON-described tree.
///
/// A JSON object with a `contents` array (even an empty one) decodes to
/// `Dir`; without it, to `File`. Directory sizes are taken from the source
/// data as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawNode")]
pub enum Node {
    File {
        name: String,
        size: u64,
        permissions: String,
        time_modified: i64,
    },
    Dir {
        name: String,
        size: u64,
        permissions: String,
        time_modified: i64,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } => name,
            Node::Dir { name, .. } => name,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Node::File { size, .. } | Node::Dir { size, .. } => *size,
        }
    }

    pub fn permissions(&self) -> &str {
        match self {
            Node::File { permissions, .. } => permissions,
            Node::Dir { permissions, .. } => permissions,
        }
    }

    pub fn time_modified(&self) -> i64 {
        match self {
            Node::File { time_modified, .. } | Node::Dir { time_modified, .. } => *time_modified,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir { .. })
    }

    pub fn kind(&self) -> EntryKind {
        if self.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        }
    }

    /// Children of a directory. Files have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::File { .. } => &[],
            Node::Dir { children, .. } => children,
        }
    }

    /// Entries starting with `.` are hidden unless `-A` is given.
    pub fn is_hidden(&self) -> bool {
        self.name().starts_with('.')
    }

    /// Total number of nodes in this subtree, including itself.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }
}

/// Wire shape of a node. `contents` decides the variant.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(default)]
    name: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    permissions: String,
    #[serde(default)]
    time_modified: i64,
    contents: Option<Vec<Node>>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        match raw.contents {
            Some(children) => Node::Dir {
                name: raw.name,
                size: raw.size,
                permissions: raw.permissions,
                time_modified: raw.time_modified,
                children,
            },
            None => Node::File {
                name: raw.name,
                size: raw.size,
                permissions: raw.permissions,
                time_modified: raw.time_modified,
            },
        }
    }
}

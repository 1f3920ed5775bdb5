//! Navigation followed by listing, for one invocation

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::config::ListConfig;
use crate::output::write_listing;
use crate::tree::{Node, navigate, not_found_message};

/// Result of a run that did not fail on I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Listed,
    /// The target path did not resolve; the message was written instead.
    NotFound,
}

/// Resolve `config.target_path` in `root` and list what it points at.
///
/// An absent or empty target lists `root` itself. A path that does not
/// resolve writes the "cannot access" message to `out` and lists nothing.
pub fn run<W: WriteColor>(root: &Node, config: &ListConfig, out: &mut W) -> io::Result<Outcome> {
    let target = match config.target_path.as_deref() {
        None | Some("") => root,
        Some(path) => match navigate(root, path) {
            Some(node) => {
                log::debug!("resolved '{}' to '{}'", path, node.name());
                node
            }
            None => {
                log::debug!("'{}' not found", path);
                writeln!(out, "{}", not_found_message(path))?;
                out.flush()?;
                return Ok(Outcome::NotFound);
            }
        },
    };

    write_listing(out, target, config)?;
    Ok(Outcome::Listed)
}

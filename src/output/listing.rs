//! Directory listing
//!
//! Entries are selected in a fixed order: kind filter, then ordering
//! (time sort or plain reverse), then the hidden-name check. Changing that
//! order changes the output.

use std::cmp::Reverse;
use std::io::{self, Write};

use chrono::{Local, TimeZone};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::config::ListConfig;
use crate::tree::Node;

use super::format::{format_mod_time, size_column};

/// Children of `node` that a listing shows, in display order.
pub fn select_entries<'a>(node: &'a Node, config: &ListConfig) -> Vec<&'a Node> {
    let mut entries: Vec<&Node> = node.children().iter().collect();

    if let Some(kind) = config.filter_by {
        entries.retain(|entry| entry.kind() == kind);
    }

    if config.sort_by_time {
        // Newest first unless -r is given. Ties keep source order either way.
        if config.reverse {
            entries.sort_by_key(|entry| entry.time_modified());
        } else {
            entries.sort_by_key(|entry| Reverse(entry.time_modified()));
        }
    } else if config.reverse {
        entries.reverse();
    }

    if !config.show_all {
        entries.retain(|entry| !entry.is_hidden());
    }

    entries
}

/// Write the listing of `node` using local time for timestamps.
pub fn write_listing<W: WriteColor>(out: &mut W, node: &Node, config: &ListConfig) -> io::Result<()> {
    write_listing_in(out, node, config, &Local)
}

/// Write the listing of `node`, formatting timestamps in `tz`.
pub fn write_listing_in<W, Tz>(out: &mut W, node: &Node, config: &ListConfig, tz: &Tz) -> io::Result<()>
where
    W: WriteColor,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let entries = select_entries(node, config);
    log::debug!("listing {} of {} entries", entries.len(), node.children().len());

    if config.long_format {
        for entry in entries {
            write!(
                out,
                "{} {} {} ",
                entry.permissions(),
                size_column(entry, config.human_readable),
                format_mod_time(entry.time_modified(), tz)
            )?;
            write_name(out, entry)?;
            writeln!(out)?;
        }
    } else {
        for entry in entries {
            write_name(out, entry)?;
            write!(out, " ")?;
        }
        writeln!(out)?;
    }

    out.flush()
}

/// Write an entry name, directories in bold blue.
fn write_name<W: WriteColor>(out: &mut W, entry: &Node) -> io::Result<()> {
    if entry.is_dir() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", entry.name())?;
        out.reset()
    } else {
        write!(out, "{}", entry.name())
    }
}

//! Field formatting for long listings

use chrono::{LocalResult, TimeZone};

use crate::tree::Node;

const SIZE_UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
const TIME_FORMAT: &str = "%b %d %H:%M";

/// Format a byte count with a single-letter unit.
///
/// The value is divided by 1024 once per unit step and each division drops
/// its remainder, so `1536` is `1K`, not `1.5K`. Anything still at or above
/// 1024 after `T` is reported in `P`.
pub fn format_size_human(bytes: u64) -> String {
    let mut size = bytes;
    for unit in SIZE_UNITS {
        if size < 1024 {
            return format!("{}{}", size, unit);
        }
        size /= 1024;
    }
    format!("{}P", size)
}

/// Format a Unix timestamp as `Mon DD HH:MM` in `tz`.
///
/// Timestamps chrono cannot represent fall back to the raw number.
pub fn format_mod_time<Tz>(timestamp: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_opt(timestamp, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format(TIME_FORMAT).to_string()
        }
        LocalResult::None => timestamp.to_string(),
    }
}

/// Size column for a long listing.
pub fn size_column(node: &Node, human_readable: bool) -> String {
    if human_readable {
        format_size_human(node.size())
    } else {
        node.size().to_string()
    }
}

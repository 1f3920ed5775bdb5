//! Listing output
//!
//! - `listing` - entry selection and the compact/long writers
//! - `format` - size and timestamp columns

mod format;
mod listing;

pub use format::{format_mod_time, format_size_human, size_column};
pub use listing::{select_entries, write_listing, write_listing_in};

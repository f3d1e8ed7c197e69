//! Default fill tokens for the bar segments.
//!
//! The styling collaborator only supplies defaults — any string passed via
//! [`Config::complete`](crate::Config::complete) or
//! [`Config::incomplete`](crate::Config::incomplete) is used verbatim.

use owo_colors::OwoColorize;

/// A green-background space, one terminal cell of "done".
pub(crate) fn default_complete() -> String {
    " ".on_green().to_string()
}

/// A white-background space, one terminal cell of "remaining".
pub(crate) fn default_incomplete() -> String {
    " ".on_white().to_string()
}

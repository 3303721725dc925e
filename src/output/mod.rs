//! Output formatting for subnet reports.
//!
//! - [`terminal`] - Colored terminal report and error lines

mod terminal;

pub use terminal::{format_error, format_report};

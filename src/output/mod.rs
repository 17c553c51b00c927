//! Output formatting for allocation plans.
//!
//! This module handles rendering an [`AllocationPlan`](crate::models::AllocationPlan):
//! - [`terminal`] - labelled entries with colors
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output

mod csv;
mod json;
mod terminal;

pub use csv::{csv_field, csv_header, render_csv};
pub use json::render_json;
pub use terminal::render_table;

//! Word-processing style model.
//!
//! This module contains the read-only style records a document model hands
//! to the CSS writers: per-side borders, the border line-style vocabulary,
//! and the cell/table style kinds.

mod border;
mod types;

pub use border::{BorderSide, BorderType, Borders, Side};
pub use types::{CellStyle, Style, TableLayout, TableStyle};

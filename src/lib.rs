//! # wordcss
//!
//! Translate word-processing table and cell styles into CSS declaration
//! lists for HTML output.
//!
//! A document model hands each table or cell a [`Style`]; the writers
//! turn it into a `property: value;` list ready for an HTML `style`
//! attribute or a stylesheet rule body. Border widths arrive in eighths
//! of a point and border styles in the word-processing vocabulary
//! ([`BorderType`]); both are normalized to CSS on the way out.
//!
//! ## Quick Start
//!
//! ```
//! use wordcss::{BorderSide, BorderType, CellStyle, Side, Style, write_cell};
//!
//! let cell = CellStyle::new().with_border(
//!     Side::Top,
//!     BorderSide {
//!         width: Some(8), // 8 eighths of a point = 1pt
//!         style: Some(BorderType::Dotted),
//!         color: Some("FF0000".into()),
//!     },
//! );
//!
//! let css = write_cell(&Style::Cell(cell));
//! assert_eq!(
//!     css,
//!     "border-top-width: 1pt; border-top-style: dotted; border-top-color: #FF0000;"
//! );
//! ```
//!
//! ## Degradation, not errors
//!
//! There is no error path. Unset fields emit nothing, border styles with
//! no CSS equivalent fall back to `solid`, and handing a writer the wrong
//! style kind yields an empty string.

pub mod css;
pub mod style;

pub use css::{BorderStyle, Declarations, resolve_borders, write_cell, write_table};
pub use style::{BorderSide, BorderType, Borders, CellStyle, Side, Style, TableLayout, TableStyle};

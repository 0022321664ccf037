//! Per-kind style writers producing inline CSS strings.
//!
//! Each writer checks the style kind before producing anything: a
//! mismatched kind yields the empty string rather than an error, so a
//! caller can feed every element's style through the writer for its tag
//! without dispatching first.

use crate::style::Style;

use super::borders::resolve_borders;
use super::declarations::Declarations;

/// Write the inline CSS for a cell style.
///
/// Returns `""` unless `style` is the cell variant.
pub fn write_cell(style: &Style) -> String {
    if !matches!(style, Style::Cell(_)) {
        return String::new();
    }
    resolve_borders(style.borders()).assemble()
}

/// Write the inline CSS for a table style.
///
/// Returns `""` unless `style` is the table variant. The `table-layout`
/// property, when a layout mode is set, precedes the border properties.
pub fn write_table(style: &Style) -> String {
    let Style::Table(table) = style else {
        return String::new();
    };
    let mut css = Declarations::new();
    if let Some(layout) = table.layout {
        css.insert("table-layout", layout.as_str());
    }
    css.extend(resolve_borders(style.borders()));
    css.assemble()
}

//! Cell and table style records and the style variant enum.

use super::border::{BorderSide, Borders, Side};

/// Table layout algorithm.
///
/// Word-processing documents spell the auto value `autofit`; the CSS
/// keyword is `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableLayout {
    Fixed,
    Auto,
}

impl TableLayout {
    /// Returns the CSS keyword for this layout mode.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            TableLayout::Fixed => "fixed",
            TableLayout::Auto => "auto",
        }
    }

    /// Parse a layout attribute value (`fixed` or `autofit`).
    #[inline]
    pub fn from_attr(s: &str) -> Option<Self> {
        match s {
            "fixed" => Some(TableLayout::Fixed),
            "autofit" => Some(TableLayout::Auto),
            _ => None,
        }
    }
}

/// Style of a single table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStyle {
    pub borders: Borders,
}

impl CellStyle {
    /// Create a cell style with no properties set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one border side, consuming and returning the style.
    pub fn with_border(mut self, side: Side, border: BorderSide) -> Self {
        self.borders.set(side, border);
        self
    }
}

/// Style of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableStyle {
    /// Layout algorithm; `None` leaves the choice to the renderer.
    pub layout: Option<TableLayout>,
    pub borders: Borders,
}

impl TableStyle {
    /// Create a table style with no properties set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout algorithm, consuming and returning the style.
    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set one border side, consuming and returning the style.
    pub fn with_border(mut self, side: Side, border: BorderSide) -> Self {
        self.borders.set(side, border);
        self
    }
}

/// A concrete style as handed over by the document model.
///
/// Each writer accepts any `Style` and silently produces nothing when the
/// kind does not match, so callers can pass whatever style a document
/// element carries without dispatching themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Style {
    Cell(CellStyle),
    Table(TableStyle),
}

impl Style {
    /// The border record, for style kinds that carry one.
    pub fn borders(&self) -> Option<&Borders> {
        match self {
            Style::Cell(cell) => Some(&cell.borders),
            Style::Table(table) => Some(&table.borders),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_attr() {
        assert_eq!(TableLayout::from_attr("fixed"), Some(TableLayout::Fixed));
        assert_eq!(TableLayout::from_attr("autofit"), Some(TableLayout::Auto));
        assert_eq!(TableLayout::from_attr("auto"), None);
        assert_eq!(TableLayout::from_attr(""), None);
    }

    #[test]
    fn test_builders() {
        let table = TableStyle::new()
            .with_layout(TableLayout::Fixed)
            .with_border(
                Side::Top,
                BorderSide {
                    width: Some(8),
                    ..Default::default()
                },
            );
        assert_eq!(table.layout, Some(TableLayout::Fixed));
        assert_eq!(table.borders.top.width, Some(8));
        assert_eq!(table.borders.left, BorderSide::default());
    }

    #[test]
    fn test_style_borders_accessor() {
        let style = Style::Cell(CellStyle::new());
        assert!(style.borders().is_some());
    }
}

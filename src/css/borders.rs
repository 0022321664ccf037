//! Border resolution: per-side width/style/color into CSS properties.

use crate::style::{Borders, Side};

use super::declarations::Declarations;
use super::properties::BorderStyle;

/// Widths below this many points collapse to `0pt`.
///
/// The clamp only applies to widths the document actually set: an unset
/// width emits nothing, while an explicit sub-visible width still emits
/// the property as `0pt`.
const MIN_VISIBLE_PT: f64 = 0.25;

/// Resolve a style's borders into CSS `border-*` properties.
///
/// Styles without border capability (`None`) resolve to an empty mapping.
/// Otherwise all twelve properties (four sides, width/style/color each)
/// are recorded in side order top, left, bottom, right; unset fields get
/// an empty value and are dropped later by
/// [`Declarations::assemble`].
pub fn resolve_borders(borders: Option<&Borders>) -> Declarations {
    let mut css = Declarations::new();
    let Some(borders) = borders else {
        return css;
    };
    for side in Side::ALL {
        let border = borders.get(side);
        css.insert(
            width_property(side),
            border.width.map(format_width).unwrap_or_default(),
        );
        css.insert(
            style_property(side),
            border
                .style
                .map(|ty| BorderStyle::from(ty).as_str().to_owned())
                .unwrap_or_default(),
        );
        css.insert(
            color_property(side),
            border
                .color
                .as_deref()
                .map(|hex| format!("#{hex}"))
                .unwrap_or_default(),
        );
    }
    css
}

/// Convert a width in eighths of a point to a CSS `pt` value.
///
/// The sub-visible clamp applies after the conversion to points: `1`
/// (0.125pt) prints as `0pt`, while `2` (exactly 0.25pt) survives.
fn format_width(eighths: u32) -> String {
    let mut pt = f64::from(eighths) / 8.0;
    if pt < MIN_VISIBLE_PT {
        pt = 0.0;
    }
    format!("{pt}pt")
}

fn width_property(side: Side) -> &'static str {
    match side {
        Side::Top => "border-top-width",
        Side::Left => "border-left-width",
        Side::Bottom => "border-bottom-width",
        Side::Right => "border-right-width",
    }
}

fn style_property(side: Side) -> &'static str {
    match side {
        Side::Top => "border-top-style",
        Side::Left => "border-left-style",
        Side::Bottom => "border-bottom-style",
        Side::Right => "border-right-style",
    }
}

fn color_property(side: Side) -> &'static str {
    match side {
        Side::Top => "border-top-color",
        Side::Left => "border-left-color",
        Side::Bottom => "border-bottom-color",
        Side::Right => "border-right-color",
    }
}

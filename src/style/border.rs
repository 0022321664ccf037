//! Per-side border model and the word-processing border vocabulary.
//!
//! Widths are stored in eighths of a point, the unit word-processing
//! formats use for border sizes. Styles are stored as [`BorderType`], the
//! source vocabulary; translation to CSS keywords happens in the writer.

/// Macro for defining word-processing keyword enums with their attribute
/// spellings.
///
/// Generates `as_str`/`from_attr` conversions plus an `ALL` table listing
/// every value in declaration order.
macro_rules! attr_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $attr:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every value in the vocabulary, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Returns the attribute spelling for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $attr,)*
                }
            }

            /// Parse an attribute value into this enum.
            #[inline]
            pub fn from_attr(s: &str) -> Option<Self> {
                match s {
                    $($attr => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

attr_enum! {
    /// Line styles a word-processing document can put on a border edge.
    ///
    /// This is the full simple-line vocabulary (art borders excluded).
    /// Many of these have no CSS equivalent and render as `solid`.
    #[non_exhaustive]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum BorderType {
        Nil => "nil",
        None => "none",
        #[default]
        Single => "single",
        Thick => "thick",
        Double => "double",
        Dotted => "dotted",
        Dashed => "dashed",
        DotDash => "dotDash",
        DotDotDash => "dotDotDash",
        Triple => "triple",
        ThinThickSmallGap => "thinThickSmallGap",
        ThickThinSmallGap => "thickThinSmallGap",
        ThinThickThinSmallGap => "thinThickThinSmallGap",
        ThinThickMediumGap => "thinThickMediumGap",
        ThickThinMediumGap => "thickThinMediumGap",
        ThinThickThinMediumGap => "thinThickThinMediumGap",
        ThinThickLargeGap => "thinThickLargeGap",
        ThickThinLargeGap => "thickThinLargeGap",
        ThinThickThinLargeGap => "thinThickThinLargeGap",
        Wave => "wave",
        DoubleWave => "doubleWave",
        DashSmallGap => "dashSmallGap",
        DashDotStroked => "dashDotStroked",
        ThreeDEmboss => "threeDEmboss",
        ThreeDEngrave => "threeDEngrave",
        Outset => "outset",
        Inset => "inset",
    }
}

/// A border edge of a table or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

impl Side {
    /// The four sides in resolution order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Bottom, Side::Right];
}

/// One side of a border: width, line style, and color, each independently
/// optional.
///
/// `None` means the document did not specify the field, which is distinct
/// from a zero or default value. Width is in eighths of a point; color is
/// a hex string without the leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderSide {
    /// Border width in eighths of a point.
    pub width: Option<u32>,
    /// Line style from the word-processing vocabulary.
    pub style: Option<BorderType>,
    /// Hex color without the leading `#`, e.g. `"FF0000"`.
    pub color: Option<String>,
}

/// The four border sides of a table or cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Borders {
    pub top: BorderSide,
    pub left: BorderSide,
    pub bottom: BorderSide,
    pub right: BorderSide,
}

impl Borders {
    /// Get the border record for a side.
    pub fn get(&self, side: Side) -> &BorderSide {
        match side {
            Side::Top => &self.top,
            Side::Left => &self.left,
            Side::Bottom => &self.bottom,
            Side::Right => &self.right,
        }
    }

    /// Get a mutable border record for a side.
    pub fn get_mut(&mut self, side: Side) -> &mut BorderSide {
        match side {
            Side::Top => &mut self.top,
            Side::Left => &mut self.left,
            Side::Bottom => &mut self.bottom,
            Side::Right => &mut self.right,
        }
    }

    /// Replace the border record for a side.
    pub fn set(&mut self, side: Side, border: BorderSide) {
        *self.get_mut(side) = border;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_attr_known_values() {
        assert_eq!(BorderType::from_attr("nil"), Some(BorderType::Nil));
        assert_eq!(
            BorderType::from_attr("dashDotStroked"),
            Some(BorderType::DashDotStroked)
        );
        assert_eq!(
            BorderType::from_attr("threeDEmboss"),
            Some(BorderType::ThreeDEmboss)
        );
    }

    #[test]
    fn test_from_attr_unknown_value() {
        assert_eq!(BorderType::from_attr("wavyGravy"), None);
        // Spellings are case-sensitive, as in the source format.
        assert_eq!(BorderType::from_attr("DashDotStroked"), None);
        assert_eq!(BorderType::from_attr(""), None);
    }

    #[test]
    fn test_borders_get_set() {
        let mut borders = Borders::default();
        borders.set(
            Side::Bottom,
            BorderSide {
                width: Some(4),
                ..Default::default()
            },
        );
        assert_eq!(borders.get(Side::Bottom).width, Some(4));
        assert_eq!(borders.get(Side::Top).width, None);

        borders.get_mut(Side::Bottom).width = Some(8);
        assert_eq!(borders.bottom.width, Some(8));
    }

    proptest! {
        #[test]
        fn prop_attr_round_trip(ty in proptest::sample::select(BorderType::ALL)) {
            prop_assert_eq!(BorderType::from_attr(ty.as_str()), Some(ty));
        }
    }
}

//! CSS border-style keywords and translation from the source vocabulary.

use crate::style::BorderType;

/// CSS `border-style` keywords emitted by the border resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
    None,
    Hidden,
}

impl BorderStyle {
    /// Returns the CSS keyword for this value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
            BorderStyle::Groove => "groove",
            BorderStyle::Ridge => "ridge",
            BorderStyle::Inset => "inset",
            BorderStyle::Outset => "outset",
            BorderStyle::None => "none",
            BorderStyle::Hidden => "hidden",
        }
    }
}

/// Map a word-processing line style onto the nearest CSS keyword.
///
/// The mapping is many-to-one and total: every dash/dot variant collapses
/// onto the plain CSS keyword, `nil` becomes `hidden`, the 3D styles map
/// to `ridge`/`groove`, and anything else renders as a solid line. The
/// catch-all arm keeps the translation total as the source vocabulary
/// grows.
impl From<BorderType> for BorderStyle {
    fn from(ty: BorderType) -> Self {
        match ty {
            BorderType::DashDotStroked | BorderType::Dashed | BorderType::DashSmallGap => {
                BorderStyle::Dashed
            }
            BorderType::Inset => BorderStyle::Inset,
            BorderType::Nil => BorderStyle::Hidden,
            BorderType::None => BorderStyle::None,
            BorderType::Outset => BorderStyle::Outset,
            BorderType::DotDash | BorderType::DotDotDash | BorderType::Dotted => {
                BorderStyle::Dotted
            }
            BorderType::Double | BorderType::DoubleWave | BorderType::Triple => BorderStyle::Double,
            BorderType::ThreeDEmboss => BorderStyle::Ridge,
            BorderType::ThreeDEngrave => BorderStyle::Groove,
            // single, thick, wave, the thin/thick compounds, and any
            // future line styles all render as a plain solid line.
            _ => BorderStyle::Solid,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_dash_group() {
        assert_eq!(BorderStyle::from(BorderType::Dashed), BorderStyle::Dashed);
        assert_eq!(
            BorderStyle::from(BorderType::DashSmallGap),
            BorderStyle::Dashed
        );
        assert_eq!(
            BorderStyle::from(BorderType::DashDotStroked),
            BorderStyle::Dashed
        );
    }

    #[test]
    fn test_dot_group() {
        assert_eq!(BorderStyle::from(BorderType::Dotted), BorderStyle::Dotted);
        assert_eq!(BorderStyle::from(BorderType::DotDash), BorderStyle::Dotted);
        assert_eq!(
            BorderStyle::from(BorderType::DotDotDash),
            BorderStyle::Dotted
        );
    }

    #[test]
    fn test_double_group() {
        assert_eq!(BorderStyle::from(BorderType::Double), BorderStyle::Double);
        assert_eq!(
            BorderStyle::from(BorderType::DoubleWave),
            BorderStyle::Double
        );
        assert_eq!(BorderStyle::from(BorderType::Triple), BorderStyle::Double);
    }

    #[test]
    fn test_singleton_mappings() {
        assert_eq!(BorderStyle::from(BorderType::Nil), BorderStyle::Hidden);
        assert_eq!(BorderStyle::from(BorderType::None), BorderStyle::None);
        assert_eq!(BorderStyle::from(BorderType::Inset), BorderStyle::Inset);
        assert_eq!(BorderStyle::from(BorderType::Outset), BorderStyle::Outset);
        assert_eq!(
            BorderStyle::from(BorderType::ThreeDEmboss),
            BorderStyle::Ridge
        );
        assert_eq!(
            BorderStyle::from(BorderType::ThreeDEngrave),
            BorderStyle::Groove
        );
    }

    #[test]
    fn test_default_arm_renders_solid() {
        assert_eq!(BorderStyle::from(BorderType::Single), BorderStyle::Solid);
        assert_eq!(BorderStyle::from(BorderType::Thick), BorderStyle::Solid);
        assert_eq!(BorderStyle::from(BorderType::Wave), BorderStyle::Solid);
        assert_eq!(
            BorderStyle::from(BorderType::ThinThickSmallGap),
            BorderStyle::Solid
        );
        assert_eq!(
            BorderStyle::from(BorderType::ThickThinLargeGap),
            BorderStyle::Solid
        );
    }

    proptest! {
        // The translation is total: every vocabulary value maps to one of
        // the CSS keywords, never panics, never produces an empty keyword.
        #[test]
        fn prop_translation_is_total(ty in proptest::sample::select(BorderType::ALL)) {
            let css = BorderStyle::from(ty);
            prop_assert!(!css.as_str().is_empty());
        }
    }
}

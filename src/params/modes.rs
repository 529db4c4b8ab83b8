//! Lenient string names for the mode selectors.
//!
//! Mode names are matched case-insensitively with `-`/space treated as `_`. An unknown name never
//! fails a parameter document: it falls back to the enum's default and logs a warning.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::ColorSpace;
use crate::fill::gradient::GradientDirection;
use crate::fill::lift::LiftMode;
use crate::params::model::{FillMode, OutlineColourMode};
use crate::shape::coverage::ShapeMode;

pub(crate) trait ModeName: Copy + Default + PartialEq + 'static {
    /// Human-readable selector name for diagnostics.
    const KIND: &'static str;
    /// Every variant with its accepted names; the first name is canonical.
    const NAMES: &'static [(Self, &'static [&'static str])];

    fn canonical_name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(v, _)| *v == self)
            .and_then(|(_, names)| names.first().copied())
            .unwrap_or("unknown")
    }

    fn from_name(raw: &str) -> Option<Self> {
        let key = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::NAMES
            .iter()
            .find(|(_, names)| names.iter().any(|n| *n == key))
            .map(|(v, _)| *v)
    }

    fn from_name_or_default(raw: &str) -> Self {
        Self::from_name(raw).unwrap_or_else(|| {
            let fallback = Self::default();
            tracing::warn!(
                kind = Self::KIND,
                value = raw,
                fallback = fallback.canonical_name(),
                "unknown mode name, using default"
            );
            fallback
        })
    }
}

macro_rules! lenient_mode_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.canonical_name())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(<$ty>::from_name_or_default(&raw))
            }
        }
    };
}

impl ModeName for ShapeMode {
    const KIND: &'static str = "shape mode";
    const NAMES: &'static [(Self, &'static [&'static str])] = &[
        (Self::RoundedPlate, &["rounded_plate", "plate", "rounded"]),
        (
            Self::FullBleedInnerOutline,
            &["full_bleed_inner_outline", "full_bleed", "fullbleed"],
        ),
    ];
}

impl ModeName for FillMode {
    const KIND: &'static str = "fill mode";
    const NAMES: &'static [(Self, &'static [&'static str])] = &[
        (Self::Single, &["single", "flat", "solid"]),
        (Self::Gradient, &["gradient"]),
    ];
}

impl ModeName for ColorSpace {
    const KIND: &'static str = "color space";
    const NAMES: &'static [(Self, &'static [&'static str])] = &[
        (Self::Rgb, &["rgb", "srgb"]),
        (Self::Hsv, &["hsv"]),
        (Self::Oklch, &["oklch", "oklab"]),
    ];
}

impl ModeName for GradientDirection {
    const KIND: &'static str = "gradient direction";
    const NAMES: &'static [(Self, &'static [&'static str])] = &[
        (Self::TopToBottom, &["top_to_bottom", "ttb", "vertical"]),
        (Self::BottomToTop, &["bottom_to_top", "btt"]),
        (Self::LeftToRight, &["left_to_right", "ltr", "horizontal"]),
        (Self::RightToLeft, &["right_to_left", "rtl"]),
        (
            Self::TopLeftToBottomRight,
            &["top_left_to_bottom_right", "tl_br"],
        ),
        (
            Self::BottomRightToTopLeft,
            &["bottom_right_to_top_left", "br_tl"],
        ),
        (
            Self::TopRightToBottomLeft,
            &["top_right_to_bottom_left", "tr_bl"],
        ),
        (
            Self::BottomLeftToTopRight,
            &["bottom_left_to_top_right", "bl_tr"],
        ),
        (Self::Radial, &["radial"]),
    ];
}

impl ModeName for LiftMode {
    const KIND: &'static str = "lift mode";
    const NAMES: &'static [(Self, &'static [&'static str])] = &[
        (Self::Centre, &["centre", "center"]),
        (Self::Top, &["top"]),
        (Self::Bottom, &["bottom"]),
        (Self::Left, &["left"]),
        (Self::Right, &["right"]),
        (Self::TopLeft, &["top_left"]),
        (Self::TopRight, &["top_right"]),
        (Self::BottomLeft, &["bottom_left"]),
        (Self::BottomRight, &["bottom_right"]),
        (Self::Edges, &["edges", "edge", "border"]),
    ];
}

impl ModeName for OutlineColourMode {
    const KIND: &'static str = "outline colour mode";
    const NAMES: &'static [(Self, &'static [&'static str])] = &[
        (
            Self::DerivedFromFill,
            &["derived_from_fill", "derived", "auto"],
        ),
        (Self::ForcedColor, &["forced_color", "forced_colour", "forced"]),
        (Self::CustomColor, &["custom_color", "custom_colour", "custom"]),
    ];
}

lenient_mode_serde!(ShapeMode);
lenient_mode_serde!(FillMode);
lenient_mode_serde!(ColorSpace);
lenient_mode_serde!(GradientDirection);
lenient_mode_serde!(LiftMode);
lenient_mode_serde!(OutlineColourMode);

#[cfg(test)]
#[path = "../../tests/unit/params/modes.rs"]
mod tests;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::ColorSpace;
use crate::fill::gradient::GradientDirection;
use crate::fill::lift::LiftMode;
use crate::foundation::error::{PlateError, PlateResult};
use crate::params::color::ColorDef;
use crate::shape::coverage::ShapeMode;

/// Whether the plate is filled with one colour or a two-colour gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillMode {
    #[default]
    Single,
    Gradient,
}

/// Where the outline band takes its colour from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutlineColourMode {
    /// The final styled fill, darkened by `OutlineParams::darken`.
    #[default]
    DerivedFromFill,
    /// `OutlineParams::forced_color`, used verbatim.
    ForcedColor,
    /// `OutlineParams::custom_color`, shaded by the same lift and vignette as the fill.
    CustomColor,
}

/// Complete, caller-owned description of one plate.
///
/// Every field has a default, so partial JSON documents are valid. Values are clamped into their
/// documented ranges during normalization; nothing here is ever rejected for being out of range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateParams {
    /// Output edge length in pixels, `[16, 2048]`.
    pub size: u32,
    pub shape: ShapeParams,
    pub fill: FillParams,
    /// Blend toward black, `[0, 0.9]`.
    pub mute: f32,
    pub outline: OutlineParams,
    /// Corner darkening strength, `[0, 1]`.
    pub vignette: f32,
    pub lift: LiftParams,
}

impl Default for PlateParams {
    fn default() -> Self {
        Self {
            size: 256,
            shape: ShapeParams::default(),
            fill: FillParams::default(),
            mute: 0.15,
            outline: OutlineParams::default(),
            vignette: 0.0,
            lift: LiftParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    pub mode: ShapeMode,
    /// Outer corner radius (rounded plate).
    pub corner_radius: f32,
    /// Width of the outline band, shared by both shape modes.
    pub outline_thickness: f32,
    /// Anti-alias width of the outer edge (rounded plate), at least 0.5px.
    pub edge_aa: f32,
    /// Corner radius of the inner border (full bleed).
    pub inner_corner_radius: f32,
    /// Anti-alias width of the inner border edges (full bleed), at least 0.5px.
    pub inner_aa: f32,
    /// Extra margin between the canvas edge and the inner border (full bleed).
    pub inner_inset: f32,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            mode: ShapeMode::RoundedPlate,
            corner_radius: 24.0,
            outline_thickness: 6.0,
            edge_aa: 1.0,
            inner_corner_radius: 16.0,
            inner_aa: 1.0,
            inner_inset: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillParams {
    pub mode: FillMode,
    /// Base colour for [`FillMode::Single`].
    #[serde(alias = "colour")]
    pub color: ColorDef,
    pub gradient: GradientParams,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            mode: FillMode::Single,
            color: ColorDef::rgb(0.42, 0.5, 0.6),
            gradient: GradientParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientParams {
    /// Colour at `t = 0`.
    pub from: ColorDef,
    /// Colour at `t = 1`.
    pub to: ColorDef,
    pub space: ColorSpace,
    pub direction: GradientDirection,
    /// Exponent applied to the radial ramp, `[0.01, 16]`.
    pub radial_power: f32,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            from: ColorDef::rgb(0.29, 0.435, 0.647),
            to: ColorDef::rgb(0.169, 0.227, 0.333),
            space: ColorSpace::Oklch,
            direction: GradientDirection::TopToBottom,
            radial_power: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineParams {
    #[serde(alias = "colour_mode")]
    pub color_mode: OutlineColourMode,
    #[serde(alias = "forced_colour")]
    pub forced_color: ColorDef,
    #[serde(alias = "custom_colour")]
    pub custom_color: ColorDef,
    /// Darkening of the derived outline colour, `[0, 1]`.
    pub darken: f32,
    /// Multiplier on the outline mask, `[0, 4]`; the scaled mask is clamped to 1.
    pub strength: f32,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            color_mode: OutlineColourMode::DerivedFromFill,
            forced_color: ColorDef::rgb(0.0, 0.0, 0.0),
            custom_color: ColorDef::rgb(1.0, 1.0, 1.0),
            darken: 0.35,
            strength: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftParams {
    pub mode: LiftMode,
    /// Peak brightening, `[0, 0.6]`.
    pub amount: f32,
    /// Exponent on the hotspot weight, `[0.05, 16]`.
    pub falloff: f32,
    /// Reach multiplier, `[0.05, 4]`.
    pub distance_scale: f32,
}

impl Default for LiftParams {
    fn default() -> Self {
        Self {
            mode: LiftMode::Centre,
            amount: 0.15,
            falloff: 1.5,
            distance_scale: 1.0,
        }
    }
}

impl PlateParams {
    /// Parse parameters from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PlateResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PlateError::serde(format!("parse plate parameters JSON: {e}")))
    }

    /// Parse parameters from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PlateResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PlateError::io(format!("open parameters JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse parameters from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> PlateResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| PlateError::serde(format!("decode plate parameters: {e}")))
    }

    pub fn to_json_pretty(&self) -> PlateResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlateError::serde(format!("encode plate parameters: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;

//! Normalization pass: clamp caller parameters and resolve every mode selector into the concrete
//! per-pixel strategy once, ahead of the pixel loop.

use crate::color::InterpolateFn;
use crate::fill::gradient::DirectionFn;
use crate::fill::lift::LiftShape;
use crate::foundation::core::Rgb;
use crate::foundation::math::{clamp01, sanitize};
use crate::params::model::{
    FillMode, GradientParams, LiftParams, OutlineColourMode, OutlineParams, PlateParams,
    ShapeParams,
};
use crate::shape::coverage::{CoverageFn, ShapeGeometry, ShapeMode};

pub const MIN_SIZE: u32 = 16;
pub const MAX_SIZE: u32 = 2048;
const MIN_AA: f32 = 0.5;
const MAX_AA: f32 = 16.0;

/// Fill colour source, before muting.
#[derive(Clone, Copy, Debug)]
pub enum FillStrategy {
    Flat(Rgb),
    Gradient {
        from: Rgb,
        to: Rgb,
        interpolate: InterpolateFn,
        direction: DirectionFn,
        radial_power: f32,
    },
}

impl FillStrategy {
    /// Raw fill colour at normalized `(u, v)`.
    pub fn color_at(&self, u: f32, v: f32) -> Rgb {
        match *self {
            Self::Flat(c) => c,
            Self::Gradient {
                from,
                to,
                interpolate,
                direction,
                radial_power,
            } => {
                let t = clamp01(direction(u, v, radial_power));
                interpolate(from, to, t)
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LiftStage {
    pub shape: LiftShape,
    pub amount: f32,
    pub falloff: f32,
    pub distance_scale: f32,
}

impl LiftStage {
    pub fn weight(&self, u: f32, v: f32) -> f32 {
        if self.amount <= 0.0 {
            return 0.0;
        }
        self.shape.weight(u, v, self.falloff, self.distance_scale)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutlineStrategy {
    Derived { darken: f32 },
    Forced(Rgb),
    Custom(Rgb),
}

/// Fully clamped plate description consumed by the compositor.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedPlate {
    pub size: u32,
    pub shape_mode: ShapeMode,
    pub geometry: ShapeGeometry,
    pub coverage: CoverageFn,
    pub fill: FillStrategy,
    pub mute: f32,
    pub lift: LiftStage,
    pub vignette: f32,
    pub outline: OutlineStrategy,
    pub outline_strength: f32,
}

/// Clamp `params` into the documented ranges and resolve all strategies.
///
/// Non-finite numbers are replaced by the field's default value.
pub fn normalize(params: &PlateParams) -> ResolvedPlate {
    let plate_defaults = PlateParams::default();
    let shape_defaults = ShapeParams::default();
    let gradient_defaults = GradientParams::default();
    let lift_defaults = LiftParams::default();
    let outline_defaults = OutlineParams::default();

    let size = params.size.clamp(MIN_SIZE, MAX_SIZE);
    if size != params.size {
        tracing::debug!(requested = params.size, size, "size clamped");
    }
    let size_f = size as f32;
    let half = size_f * 0.5;

    let shape = &params.shape;
    let outline = field(
        "shape.outline_thickness",
        shape.outline_thickness,
        0.0,
        half,
        shape_defaults.outline_thickness,
    );
    let geometry = match shape.mode {
        ShapeMode::RoundedPlate => ShapeGeometry {
            size: size_f,
            corner_radius: field(
                "shape.corner_radius",
                shape.corner_radius,
                0.0,
                half,
                shape_defaults.corner_radius,
            ),
            outline,
            aa: field(
                "shape.edge_aa",
                shape.edge_aa,
                MIN_AA,
                MAX_AA,
                shape_defaults.edge_aa,
            ),
            inset: 0.0,
        },
        ShapeMode::FullBleedInnerOutline => ShapeGeometry {
            size: size_f,
            corner_radius: field(
                "shape.inner_corner_radius",
                shape.inner_corner_radius,
                0.0,
                half,
                shape_defaults.inner_corner_radius,
            ),
            outline,
            aa: field(
                "shape.inner_aa",
                shape.inner_aa,
                MIN_AA,
                MAX_AA,
                shape_defaults.inner_aa,
            ),
            inset: field(
                "shape.inner_inset",
                shape.inner_inset,
                0.0,
                size_f * 0.25,
                shape_defaults.inner_inset,
            ),
        },
    };

    let fill = match params.fill.mode {
        FillMode::Single => FillStrategy::Flat(params.fill.color.to_rgb()),
        FillMode::Gradient => {
            let g = &params.fill.gradient;
            FillStrategy::Gradient {
                from: g.from.to_rgb(),
                to: g.to.to_rgb(),
                interpolate: g.space.interpolator(),
                direction: g.direction.evaluator(),
                radial_power: field(
                    "fill.gradient.radial_power",
                    g.radial_power,
                    0.01,
                    16.0,
                    gradient_defaults.radial_power,
                ),
            }
        }
    };

    let lift = LiftStage {
        shape: LiftShape::from_mode(params.lift.mode),
        amount: field(
            "lift.amount",
            params.lift.amount,
            0.0,
            0.6,
            lift_defaults.amount,
        ),
        falloff: field(
            "lift.falloff",
            params.lift.falloff,
            0.05,
            16.0,
            lift_defaults.falloff,
        ),
        distance_scale: field(
            "lift.distance_scale",
            params.lift.distance_scale,
            0.05,
            4.0,
            lift_defaults.distance_scale,
        ),
    };

    let o = &params.outline;
    let outline_strategy = match o.color_mode {
        OutlineColourMode::DerivedFromFill => OutlineStrategy::Derived {
            darken: field("outline.darken", o.darken, 0.0, 1.0, outline_defaults.darken),
        },
        OutlineColourMode::ForcedColor => OutlineStrategy::Forced(o.forced_color.to_rgb()),
        OutlineColourMode::CustomColor => OutlineStrategy::Custom(o.custom_color.to_rgb()),
    };

    ResolvedPlate {
        size,
        shape_mode: shape.mode,
        geometry,
        coverage: shape.mode.coverage_fn(),
        fill,
        mute: field("mute", params.mute, 0.0, 0.9, plate_defaults.mute),
        lift,
        vignette: field("vignette", params.vignette, 0.0, 1.0, plate_defaults.vignette),
        outline: outline_strategy,
        outline_strength: field(
            "outline.strength",
            o.strength,
            0.0,
            4.0,
            outline_defaults.strength,
        ),
    }
}

fn field(name: &'static str, value: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    let v = sanitize(value, lo, hi, fallback);
    if v != value {
        tracing::debug!(field = name, requested = value, clamped = v, "parameter clamped");
    }
    v
}

#[cfg(test)]
#[path = "../../tests/unit/params/resolve.rs"]
mod tests;

use crate::foundation::math::smoothstep;
use crate::shape::sdf::{sd_inset_rounded_box, sd_rounded_box};

/// Which silhouette the plate uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// Rounded rectangle with transparent corners and an outline along its edge.
    #[default]
    RoundedPlate,
    /// Opaque square with a rounded border drawn inside the canvas.
    FullBleedInnerOutline,
}

impl ShapeMode {
    pub fn coverage_fn(self) -> CoverageFn {
        match self {
            Self::RoundedPlate => plate_coverage,
            Self::FullBleedInnerOutline => full_bleed_coverage,
        }
    }
}

/// Clamped shape geometry, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeGeometry {
    /// Canvas edge length.
    pub size: f32,
    /// Outer corner radius (plate) or inner border corner radius (full bleed).
    pub corner_radius: f32,
    /// Outline band thickness.
    pub outline: f32,
    /// Anti-alias width of the edges.
    pub aa: f32,
    /// Extra margin between the canvas edge and the inner border (full bleed only).
    pub inset: f32,
}

/// Per-pixel shape coverage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coverage {
    /// Shape alpha in `[0, 1]`.
    pub alpha: f32,
    /// Outline band weight in `[0, 1]`, before the strength multiplier.
    pub outline: f32,
}

impl Coverage {
    pub const EMPTY: Self = Self {
        alpha: 0.0,
        outline: 0.0,
    };
}

/// Coverage strategy selected once per generation from the shape mode.
pub type CoverageFn = fn(&ShapeGeometry, f32, f32) -> Coverage;

/// Rounded plate with transparent corners and an outline band just inside the edge.
pub fn plate_coverage(g: &ShapeGeometry, px: f32, py: f32) -> Coverage {
    let half_aa = g.aa * 0.5;
    let d = sd_rounded_box(px, py, g.size, g.size, g.corner_radius);

    let alpha = smoothstep(half_aa, -half_aa, d);
    if alpha <= 0.0 {
        return Coverage::EMPTY;
    }

    let band = if g.outline > 0.0 {
        smoothstep(-g.outline - half_aa, -g.outline + half_aa, d)
    } else {
        0.0
    };

    Coverage {
        alpha,
        outline: alpha * band,
    }
}

/// Opaque full-bleed square with a rounded border band drawn inside the canvas.
///
/// The band is `outline` wide, its centre line sits `inset + outline / 2` in from the canvas edge,
/// and both of its edges are anti-aliased independently.
pub fn full_bleed_coverage(g: &ShapeGeometry, px: f32, py: f32) -> Coverage {
    if g.outline <= 0.0 {
        return Coverage {
            alpha: 1.0,
            outline: 0.0,
        };
    }

    let half_aa = g.aa * 0.5;
    let half_band = g.outline * 0.5;
    let d = sd_inset_rounded_box(
        px,
        py,
        g.size,
        g.size,
        g.inset + half_band,
        g.corner_radius,
    );

    let outer = smoothstep(half_band + half_aa, half_band - half_aa, d);
    let inner = smoothstep(-half_band - half_aa, -half_band + half_aa, d);

    Coverage {
        alpha: 1.0,
        outline: outer * inner,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/coverage.rs"]
mod tests;

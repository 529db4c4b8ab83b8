use crate::fill::gradient::CENTER_TO_CORNER;
use crate::foundation::core::Rgb;
use crate::foundation::math::clamp01;

/// Origin of the brightness lift.
///
/// The first nine variants are point hotspots; `Edges` lifts along all four borders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LiftMode {
    #[default]
    Centre = 0,
    Top = 1,
    Bottom = 2,
    Left = 3,
    Right = 4,
    TopLeft = 5,
    TopRight = 6,
    BottomLeft = 7,
    BottomRight = 8,
    Edges = 9,
}

/// Hotspot anchors in normalized `(u, v)` space, indexed by [`LiftMode`] discriminant.
const HOTSPOT_ANCHORS: [[f32; 2]; 9] = [
    [0.5, 0.5],
    [0.5, 0.0],
    [0.5, 1.0],
    [0.0, 0.5],
    [1.0, 0.5],
    [0.0, 0.0],
    [1.0, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
];

impl LiftMode {
    /// Hotspot anchor for point modes, `None` for [`LiftMode::Edges`].
    pub fn anchor(self) -> Option<[f32; 2]> {
        HOTSPOT_ANCHORS.get(self as usize).copied()
    }
}

/// Weight of a point hotspot at `(u, v)`: 1 on the anchor, fading to 0 at
/// `CENTER_TO_CORNER * distance_scale` away.
pub fn hotspot_weight(u: f32, v: f32, anchor: [f32; 2], falloff: f32, distance_scale: f32) -> f32 {
    let reach = CENTER_TO_CORNER * distance_scale;
    let d = (u - anchor[0]).hypot(v - anchor[1]);
    (1.0 - clamp01(d / reach)).powf(falloff)
}

/// Weight of the border lift at `(u, v)`: 1 on any border, 0 at `0.5 * distance_scale` inward.
pub fn edge_weight(u: f32, v: f32, falloff: f32, distance_scale: f32) -> f32 {
    let d = u.min(1.0 - u).min(v).min(1.0 - v).max(0.0);
    (1.0 - clamp01(d / (0.5 * distance_scale))).powf(falloff)
}

/// Lift shape resolved from a [`LiftMode`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LiftShape {
    Hotspot([f32; 2]),
    Edges,
}

impl LiftShape {
    pub fn from_mode(mode: LiftMode) -> Self {
        mode.anchor().map_or(Self::Edges, Self::Hotspot)
    }

    pub fn weight(self, u: f32, v: f32, falloff: f32, distance_scale: f32) -> f32 {
        match self {
            Self::Hotspot(anchor) => hotspot_weight(u, v, anchor, falloff, distance_scale),
            Self::Edges => edge_weight(u, v, falloff, distance_scale),
        }
    }
}

/// Brighten `c` by `1 + amount * weight`, saturating each channel at 1.
pub fn apply_lift(c: Rgb, amount: f32, weight: f32) -> Rgb {
    let k = 1.0 + amount * weight;
    c.map(|ch| (ch * k).min(1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/fill/lift.rs"]
mod tests;

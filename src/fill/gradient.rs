use crate::foundation::math::clamp01;

/// Distance from the centre of the unit square to one of its corners.
pub(crate) const CENTER_TO_CORNER: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Direction along which the two gradient colours are laid out.
///
/// Names read "from colour A to colour B"; `v` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    #[default]
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
    TopLeftToBottomRight,
    BottomRightToTopLeft,
    TopRightToBottomLeft,
    BottomLeftToTopRight,
    /// Colour A at the centre, colour B at the corners.
    Radial,
}

/// Maps a normalized coordinate `(u, v)` and the radial exponent to an unclamped gradient `t`.
pub type DirectionFn = fn(f32, f32, f32) -> f32;

impl GradientDirection {
    pub fn evaluator(self) -> DirectionFn {
        match self {
            Self::TopToBottom => top_to_bottom,
            Self::BottomToTop => bottom_to_top,
            Self::LeftToRight => left_to_right,
            Self::RightToLeft => right_to_left,
            Self::TopLeftToBottomRight => top_left_to_bottom_right,
            Self::BottomRightToTopLeft => bottom_right_to_top_left,
            Self::TopRightToBottomLeft => top_right_to_bottom_left,
            Self::BottomLeftToTopRight => bottom_left_to_top_right,
            Self::Radial => radial_t,
        }
    }

    /// Gradient parameter at `(u, v)`, always within `[0, 1]`.
    pub fn t_at(self, u: f32, v: f32, radial_power: f32) -> f32 {
        clamp01((self.evaluator())(u, v, radial_power))
    }
}

fn top_to_bottom(_u: f32, v: f32, _power: f32) -> f32 {
    v
}

fn bottom_to_top(_u: f32, v: f32, _power: f32) -> f32 {
    1.0 - v
}

fn left_to_right(u: f32, _v: f32, _power: f32) -> f32 {
    u
}

fn right_to_left(u: f32, _v: f32, _power: f32) -> f32 {
    1.0 - u
}

fn top_left_to_bottom_right(u: f32, v: f32, _power: f32) -> f32 {
    (u + v) * 0.5
}

fn bottom_right_to_top_left(u: f32, v: f32, _power: f32) -> f32 {
    ((1.0 - u) + (1.0 - v)) * 0.5
}

fn top_right_to_bottom_left(u: f32, v: f32, _power: f32) -> f32 {
    ((1.0 - u) + v) * 0.5
}

fn bottom_left_to_top_right(u: f32, v: f32, _power: f32) -> f32 {
    (u + (1.0 - v)) * 0.5
}

fn radial_t(u: f32, v: f32, power: f32) -> f32 {
    let d = (u - 0.5).hypot(v - 0.5) / CENTER_TO_CORNER;
    clamp01(d).powf(power.max(0.01))
}

#[cfg(test)]
#[path = "../../tests/unit/fill/gradient.rs"]
mod tests;

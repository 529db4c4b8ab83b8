use crate::fill::gradient::CENTER_TO_CORNER;
use crate::foundation::math::clamp01;

const VIGNETTE_EXPONENT: f32 = 1.4;

/// Multiplicative darkening at `(u, v)`: 1 at the centre, `1 - strength` in the corners.
pub fn vignette_factor(u: f32, v: f32, strength: f32) -> f32 {
    let d = clamp01((u - 0.5).hypot(v - 0.5) / CENTER_TO_CORNER);
    1.0 - strength * d.powf(VIGNETTE_EXPONENT)
}

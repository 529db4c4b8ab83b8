use crate::fill::lift::apply_lift;
use crate::fill::vignette::vignette_factor;
use crate::foundation::core::Rgba;
use crate::foundation::math::clamp01;
use crate::params::resolve::{OutlineStrategy, ResolvedPlate};

/// Shade pixel `(x, y)`.
///
/// The stage order is fixed: coverage, early-out, raw fill, mute, lift, vignette, outline colour,
/// outline blend, alpha. The outline is blended last so it always tracks the styled fill.
pub fn shade_pixel(plate: &ResolvedPlate, x: u32, y: u32) -> Rgba {
    let px = x as f32 + 0.5;
    let py = y as f32 + 0.5;

    let coverage = (plate.coverage)(&plate.geometry, px, py);
    if coverage.alpha <= 0.0 {
        return Rgba::TRANSPARENT;
    }

    let size = plate.size as f32;
    let u = px / size;
    let v = py / size;

    let raw = plate.fill.color_at(u, v);
    let muted = raw.scale(1.0 - plate.mute);

    let lift_weight = plate.lift.weight(u, v);
    let lifted = apply_lift(muted, plate.lift.amount, lift_weight);

    let vignette = if plate.vignette > 0.0 {
        vignette_factor(u, v, plate.vignette)
    } else {
        1.0
    };
    let styled = lifted.scale(vignette);

    let outline_color = match plate.outline {
        OutlineStrategy::Derived { darken } => styled.scale(1.0 - darken),
        OutlineStrategy::Forced(c) => c,
        OutlineStrategy::Custom(c) => apply_lift(c, plate.lift.amount, lift_weight).scale(vignette),
    };

    let mask = clamp01(coverage.outline * plate.outline_strength);
    let rgb = styled.lerp(outline_color, mask).clamp01();

    Rgba::from_rgb(rgb, coverage.alpha)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;

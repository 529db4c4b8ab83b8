//! Signed distance functions for axis-aligned rounded rectangles.
//!
//! Distances are in pixels: negative inside, zero on the boundary, positive outside.

/// Signed distance from `(px, py)` to a `width x height` rounded rectangle anchored at the origin.
///
/// The radius is limited to half the shorter side, so `radius = 0` yields a plain box distance and
/// an oversized radius yields a stadium/circle.
pub fn sd_rounded_box(px: f32, py: f32, width: f32, height: f32, radius: f32) -> f32 {
    let hw = width.max(0.0) * 0.5;
    let hh = height.max(0.0) * 0.5;
    let r = radius.max(0.0).min(hw.min(hh));

    let qx = (px - hw).abs() - (hw - r);
    let qy = (py - hh).abs() - (hh - r);

    let outside = qx.max(0.0).hypot(qy.max(0.0));
    let inside = qx.max(qy).min(0.0);
    outside + inside - r
}

/// Signed distance to a rounded rectangle inset uniformly by `inset` from a `width x height` canvas.
pub fn sd_inset_rounded_box(
    px: f32,
    py: f32,
    width: f32,
    height: f32,
    inset: f32,
    radius: f32,
) -> f32 {
    let inset = inset.max(0.0);
    sd_rounded_box(
        px - inset,
        py - inset,
        width - 2.0 * inset,
        height - 2.0 * inset,
        radius,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/shape/sdf.rs"]
mod tests;

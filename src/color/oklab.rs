//! OKLab / OKLCH conversions for perceptually smooth gradients.
//!
//! These types never leave the colour module: callers hand in sRGB and get sRGB back.

use std::f32::consts::{PI, TAU};

use crate::color::transfer::{linear_to_srgb, srgb_to_linear};
use crate::foundation::core::Rgb;
use crate::foundation::math::lerp;

const ACHROMATIC_EPS: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct OkLab {
    pub(crate) l: f32,
    pub(crate) a: f32,
    pub(crate) b: f32,
}

/// Cylindrical OKLab. `h` is in radians, `[0, 2pi)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct OkLch {
    pub(crate) l: f32,
    pub(crate) c: f32,
    pub(crate) h: f32,
}

pub(crate) fn linear_to_oklab(r: f32, g: f32, b: f32) -> OkLab {
    let l = 0.412_221_46 * r + 0.536_332_55 * g + 0.051_445_995 * b;
    let m = 0.211_903_5 * r + 0.680_699_5 * g + 0.107_396_96 * b;
    let s = 0.088_302_46 * r + 0.281_718_85 * g + 0.629_978_7 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    OkLab {
        l: 0.210_454_26 * l_ + 0.793_617_8 * m_ - 0.004_072_047 * s_,
        a: 1.977_998_5 * l_ - 2.428_592_2 * m_ + 0.450_593_7 * s_,
        b: 0.025_904_037 * l_ + 0.782_771_77 * m_ - 0.808_675_77 * s_,
    }
}

/// Inverse of [`linear_to_oklab`]; the result is unclamped linear RGB.
pub(crate) fn oklab_to_linear(c: OkLab) -> (f32, f32, f32) {
    let l_ = c.l + 0.396_337_78 * c.a + 0.215_803_76 * c.b;
    let m_ = c.l - 0.105_561_346 * c.a - 0.063_854_17 * c.b;
    let s_ = c.l - 0.089_484_18 * c.a - 1.291_485_5 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    (
        4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_94 * s,
        -1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s,
        -0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s,
    )
}

pub(crate) fn oklab_to_oklch(c: OkLab) -> OkLch {
    OkLch {
        l: c.l,
        c: c.a.hypot(c.b),
        h: wrap_tau(c.b.atan2(c.a)),
    }
}

pub(crate) fn oklch_to_oklab(c: OkLch) -> OkLab {
    OkLab {
        l: c.l,
        a: c.c * c.h.cos(),
        b: c.c * c.h.sin(),
    }
}

pub(crate) fn srgb_to_oklch(c: Rgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(
        srgb_to_linear(c.r),
        srgb_to_linear(c.g),
        srgb_to_linear(c.b),
    ))
}

/// Back to sRGB, clamping out-of-gamut channels into `[0, 1]`.
pub(crate) fn oklch_to_srgb(c: OkLch) -> Rgb {
    let (r, g, b) = oklab_to_linear(oklch_to_oklab(c));
    Rgb::new(r, g, b).clamp01().map(linear_to_srgb).clamp01()
}

/// Interpolate in OKLCH: lightness and chroma linearly, hue along the shorter arc.
pub fn lerp_oklch(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let mut ca = srgb_to_oklch(a);
    let mut cb = srgb_to_oklch(b);

    if ca.c < ACHROMATIC_EPS {
        ca.h = cb.h;
    }
    if cb.c < ACHROMATIC_EPS {
        cb.h = ca.h;
    }

    oklch_to_srgb(OkLch {
        l: lerp(ca.l, cb.l, t),
        c: lerp(ca.c, cb.c, t),
        h: wrap_tau(ca.h + shortest_hue_delta(ca.h, cb.h) * t),
    })
}

/// Signed angular delta from `from` to `to`, in `(-pi, pi]`.
pub(crate) fn shortest_hue_delta(from: f32, to: f32) -> f32 {
    let d = (to - from + PI).rem_euclid(TAU) - PI;
    if d <= -PI { d + TAU } else { d }
}

fn wrap_tau(h: f32) -> f32 {
    let w = h.rem_euclid(TAU);
    if w >= TAU { 0.0 } else { w }
}

#[cfg(test)]
#[path = "../../tests/unit/color/oklab.rs"]
mod tests;

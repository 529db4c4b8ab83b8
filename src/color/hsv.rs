use crate::foundation::core::Rgb;
use crate::foundation::math::lerp;

/// Below this saturation a colour's hue carries no information.
const ACHROMATIC_EPS: f32 = 1e-4;

/// Hue/saturation/value triple. Hue is measured in turns, `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };
    let h = if delta <= 0.0 {
        0.0
    } else if max == c.r {
        ((c.g - c.b) / delta).rem_euclid(6.0) / 6.0
    } else if max == c.g {
        ((c.b - c.r) / delta + 2.0) / 6.0
    } else {
        ((c.r - c.g) / delta + 4.0) / 6.0
    };

    Hsv {
        h: wrap_turns(h),
        s,
        v: max,
    }
}

pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let h6 = wrap_turns(c.h) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let v = c.v;
    let p = v * (1.0 - c.s);
    let q = v * (1.0 - c.s * f);
    let t = v * (1.0 - c.s * (1.0 - f));

    match (sector as u32) % 6 {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

/// Interpolate in HSV, sweeping hue along the shorter arc.
pub fn lerp_hsv(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let mut ha = rgb_to_hsv(a);
    let mut hb = rgb_to_hsv(b);

    if ha.s < ACHROMATIC_EPS {
        ha.h = hb.h;
    }
    if hb.s < ACHROMATIC_EPS {
        hb.h = ha.h;
    }

    let mut dh = hb.h - ha.h;
    if dh > 0.5 {
        dh -= 1.0;
    } else if dh < -0.5 {
        dh += 1.0;
    }

    hsv_to_rgb(Hsv {
        h: wrap_turns(ha.h + dh * t),
        s: lerp(ha.s, hb.s, t),
        v: lerp(ha.v, hb.v, t),
    })
    .clamp01()
}

fn wrap_turns(h: f32) -> f32 {
    let w = h.rem_euclid(1.0);
    if w >= 1.0 { 0.0 } else { w }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsv.rs"]
mod tests;

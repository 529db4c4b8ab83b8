pub(crate) mod hsv;
pub(crate) mod oklab;
pub(crate) mod transfer;

use crate::foundation::core::Rgb;

/// Colour space used to interpolate between the two gradient colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Channel-wise blend of the sRGB values.
    #[default]
    Rgb,
    /// Hue/saturation/value with shortest-arc hue.
    Hsv,
    /// Perceptual OKLCH with shortest-arc hue.
    Oklch,
}

/// Two-colour interpolation strategy.
pub type InterpolateFn = fn(Rgb, Rgb, f32) -> Rgb;

impl ColorSpace {
    /// Resolve the interpolation function once, ahead of the pixel loop.
    pub fn interpolator(self) -> InterpolateFn {
        match self {
            Self::Rgb => lerp_rgb,
            Self::Hsv => hsv::lerp_hsv,
            Self::Oklch => oklab::lerp_oklch,
        }
    }

    /// Interpolate from `a` (t = 0) to `b` (t = 1); `t` is clamped to `[0, 1]`.
    pub fn interpolate(self, a: Rgb, b: Rgb, t: f32) -> Rgb {
        (self.interpolator())(a, b, crate::foundation::math::clamp01(t))
    }
}

fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    a.lerp(b, t).clamp01()
}

use crate::foundation::core::Rgb;
use serde::{Deserialize, Serialize};

/// Parameter-facing colour.
///
/// Accepts `"#RRGGBB"`, `[r, g, b]` or `{ "r": .., "g": .., "b": .. }` with float channels in
/// `[0, 1]`; always serializes as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDef {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorDef {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(format!("hex color must be #RRGGBB, got \"{s}\""));
        }

        fn hex_byte(pair: &str) -> Result<f32, String> {
            u8::from_str_radix(pair, 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        Ok(Self::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        ))
    }

    /// Channels clamped into `[0, 1]`; non-finite channels become 0.
    pub fn to_rgb(self) -> Rgb {
        fn channel(c: f32) -> f32 {
            if c.is_finite() { c.clamp(0.0, 1.0) } else { 0.0 }
        }
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl From<Rgb> for ColorDef {
    fn from(c: Rgb) -> Self {
        Self::rgb(c.r, c.g, c.b)
    }
}

impl Serialize for ColorDef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.r, self.g, self.b].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj { r: f32, g: f32, b: f32 },
            Arr(Vec<f32>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Self::rgb(r, g, b)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                _ => Err(serde::de::Error::custom(
                    "rgb array must have exactly 3 elements ([r,g,b])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/color.rs"]
mod tests;

use crate::foundation::core::Rgba;
use crate::foundation::math::Fnv1a64;

/// Square, row-major grid of straight-alpha RGBA pixels.
///
/// Produced once per generation call and owned entirely by the caller afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    size: u32,
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    pub(crate) fn from_pixels(size: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), (size as usize) * (size as usize));
        Self { size, pixels }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Pixel at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.pixels
            .get(y as usize * self.size as usize + x as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }

    /// Straight-alpha RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgba8()).collect()
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn to_rgba8_premul(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgba8_premul()).collect()
    }

    /// FNV-1a digest over the edge length and the straight RGBA8 bytes.
    pub fn digest(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.size);
        for p in &self.pixels {
            h.write_bytes(&p.to_rgba8());
        }
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;

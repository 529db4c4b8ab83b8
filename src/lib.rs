//! Rarity-plate is a deterministic procedural generator for rounded "rarity plate" bitmaps: the
//! coloured, outlined tiles that sit behind item icons in game inventories.
//!
//! One call turns a [`PlateParams`] description into a square [`PixelGrid`] of straight-alpha
//! RGBA pixels. Every pixel is a pure function of the parameters and its own coordinate.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: `PlateParams -> ResolvedPlate` (clamp every field, resolve every mode selector
//!    into a concrete strategy once)
//! 2. **Shade**: for each pixel, shape coverage, then fill, mute, lift, vignette, outline colour,
//!    outline blend and alpha, in that fixed order
//! 3. **Hand off**: the grid belongs to the caller; [`write_png`] and [`write_sidecar`] are the
//!    stock collaborators for files on disk
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total core**: out-of-range numbers are clamped, unknown mode names fall back to defaults.
//!   [`generate`] cannot fail.
//! - **Deterministic**: parallel generation is bit-identical to sequential generation
//!   (see [`PixelGrid::digest`]).
#![forbid(unsafe_code)]

mod batch;
mod color;
mod encode;
mod fill;
mod foundation;
mod params;
mod render;
mod shape;

pub use batch::{BatchEntry, BatchFile, BatchOutput, generate_batch, write_batch};
pub use color::ColorSpace;
pub use color::hsv::{Hsv, hsv_to_rgb, lerp_hsv, rgb_to_hsv};
pub use color::oklab::lerp_oklch;
pub use color::transfer::{linear_to_srgb, srgb_to_linear};
pub use encode::import::{FilterMode, ImportSettings, WrapMode, sidecar_path, write_sidecar};
pub use encode::png::write_png;
pub use fill::gradient::GradientDirection;
pub use fill::lift::{LiftMode, apply_lift, edge_weight, hotspot_weight};
pub use fill::vignette::vignette_factor;
pub use foundation::core::{Rgb, Rgba};
pub use foundation::error::{PlateError, PlateResult};
pub use foundation::math::{clamp01, lerp, smoothstep};
pub use params::color::ColorDef;
pub use params::model::{
    FillMode, FillParams, GradientParams, LiftParams, OutlineColourMode, OutlineParams,
    PlateParams, ShapeParams,
};
pub use params::resolve::{MAX_SIZE, MIN_SIZE, ResolvedPlate, normalize};
pub use render::compositor::shade_pixel;
pub use render::grid::PixelGrid;
pub use render::pipeline::{RenderThreading, generate, generate_with, render_resolved};
pub use shape::coverage::{
    Coverage, ShapeGeometry, ShapeMode, full_bleed_coverage, plate_coverage,
};
pub use shape::sdf::{sd_inset_rounded_box, sd_rounded_box};

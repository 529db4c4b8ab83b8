use rayon::prelude::*;

use crate::foundation::core::Rgba;
use crate::foundation::error::{PlateError, PlateResult};
use crate::params::model::PlateParams;
use crate::params::resolve::{ResolvedPlate, normalize};
use crate::render::compositor::shade_pixel;
use crate::render::grid::PixelGrid;

/// Worker configuration for [`generate_with`].
///
/// Sequential by default. Parallel generation splits the grid into rows; the result is
/// bit-identical to the sequential path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Worker count for the parallel path. `None` uses rayon's default.
    pub threads: Option<usize>,
}

/// Generate a plate sequentially.
///
/// This is the primary one-shot API: parameters in, a fresh `size x size` grid out. All inputs are
/// clamped first, so this never fails.
pub fn generate(params: PlateParams) -> PixelGrid {
    render_resolved(&normalize(&params))
}

/// Generate a plate with explicit threading.
///
/// Fails only when the worker pool cannot be built (`threads == Some(0)`).
#[tracing::instrument(
    skip_all,
    fields(size = params.size, shape = ?params.shape.mode, fill = ?params.fill.mode)
)]
pub fn generate_with(params: PlateParams, threading: &RenderThreading) -> PlateResult<PixelGrid> {
    let plate = normalize(&params);
    if !threading.parallel {
        return Ok(render_resolved(&plate));
    }

    let pool = build_thread_pool(threading.threads)?;
    Ok(pool.install(|| render_resolved_parallel(&plate)))
}

/// Shade every pixel of an already normalized plate, row by row.
pub fn render_resolved(plate: &ResolvedPlate) -> PixelGrid {
    let size = plate.size;
    let mut pixels = vec![Rgba::TRANSPARENT; size as usize * size as usize];
    for (y, row) in pixels.chunks_mut(size as usize).enumerate() {
        shade_row(plate, y as u32, row);
    }
    PixelGrid::from_pixels(size, pixels)
}

fn render_resolved_parallel(plate: &ResolvedPlate) -> PixelGrid {
    let size = plate.size;
    let mut pixels = vec![Rgba::TRANSPARENT; size as usize * size as usize];
    pixels
        .par_chunks_mut(size as usize)
        .enumerate()
        .for_each(|(y, row)| shade_row(plate, y as u32, row));
    PixelGrid::from_pixels(size, pixels)
}

fn shade_row(plate: &ResolvedPlate, y: u32, row: &mut [Rgba]) {
    for (x, px) in row.iter_mut().enumerate() {
        *px = shade_pixel(plate, x as u32, y);
    }
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> PlateResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PlateError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PlateError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;

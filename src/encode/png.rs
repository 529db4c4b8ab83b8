use std::path::Path;

use crate::foundation::error::{PlateError, PlateResult};
use crate::render::grid::PixelGrid;

/// Encode `grid` as a straight-alpha RGBA8 PNG at `path`, creating parent directories.
pub fn write_png(grid: &PixelGrid, path: &Path) -> PlateResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            PlateError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    image::save_buffer_with_format(
        path,
        &grid.to_rgba8(),
        grid.size(),
        grid.size(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| PlateError::io(format!("write png '{}': {e}", path.display())))?;

    tracing::debug!(path = %path.display(), size = grid.size(), "png written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;

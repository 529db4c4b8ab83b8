use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{PlateError, PlateResult};

/// Texture addressing preference for the importing engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    #[default]
    Clamp,
    Repeat,
}

/// Texture sampling preference for the importing engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    Point,
    #[default]
    Bilinear,
}

/// Asset-import metadata carried alongside generated plates. Never read by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    pub pixels_per_unit: f32,
    pub generate_mipmaps: bool,
    pub wrap_mode: WrapMode,
    pub filter_mode: FilterMode,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            pixels_per_unit: 100.0,
            generate_mipmaps: false,
            wrap_mode: WrapMode::Clamp,
            filter_mode: FilterMode::Bilinear,
        }
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    image: &'a str,
    size: u32,
    #[serde(flatten)]
    settings: &'a ImportSettings,
}

/// Path of the sidecar that belongs to `image_path`: `<dir>/<stem>.import.json`.
pub fn sidecar_path(image_path: &Path) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    image_path.with_file_name(format!("{stem}.import.json"))
}

/// Write the import sidecar for the `size x size` image at `image_path`.
///
/// Returns the sidecar path. Fails with a validation error when `image_path` has no file name.
pub fn write_sidecar(
    settings: &ImportSettings,
    image_path: &Path,
    size: u32,
) -> PlateResult<PathBuf> {
    let (Some(_), Some(image)) = (image_path.file_stem(), image_path.file_name()) else {
        return Err(PlateError::validation(format!(
            "sidecar image path '{}' has no file name",
            image_path.display()
        )));
    };
    let image = image.to_string_lossy().into_owned();
    let out = sidecar_path(image_path);

    let body = serde_json::to_string_pretty(&Sidecar {
        image: &image,
        size,
        settings,
    })
    .map_err(|e| PlateError::serde(format!("encode import sidecar: {e}")))?;

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            PlateError::io(format!("create sidecar dir '{}': {e}", parent.display()))
        })?;
    }
    std::fs::write(&out, body)
        .map_err(|e| PlateError::io(format!("write sidecar '{}': {e}", out.display())))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/import.rs"]
mod tests;

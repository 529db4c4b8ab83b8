//! Batch generation: many named plates sharing one set of defaults.
//!
//! A batch document carries a full [`PlateParams`] as `defaults`, the import metadata written next
//! to every output, and a list of entries. Each entry's `params` is a partial JSON object that is
//! deep-merged over the defaults, so an entry only spells out what differs:
//!
//! ```json
//! {
//!   "defaults": { "size": 128, "fill": { "mode": "gradient" } },
//!   "entries": [
//!     { "name": "common" },
//!     { "name": "epic", "params": { "fill": { "gradient": { "from": "#a335ee" } } } }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::encode::import::{ImportSettings, write_sidecar};
use crate::encode::png::write_png;
use crate::foundation::error::{PlateError, PlateResult};
use crate::params::model::PlateParams;
use crate::render::grid::PixelGrid;
use crate::render::pipeline::{RenderThreading, build_thread_pool, generate};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchFile {
    pub defaults: PlateParams,
    pub import: ImportSettings,
    pub entries: Vec<BatchEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Output file stem. Must be unique within the batch and free of path separators.
    pub name: String,
    /// Partial parameter overrides, merged over [`BatchFile::defaults`].
    #[serde(default)]
    pub params: serde_json::Value,
}

/// One generated batch entry.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub name: String,
    pub params: PlateParams,
    pub grid: PixelGrid,
}

impl BatchFile {
    pub fn from_reader<R: std::io::Read>(r: R) -> PlateResult<Self> {
        serde_json::from_reader(r).map_err(|e| PlateError::serde(format!("parse batch JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> PlateResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| PlateError::io(format!("open batch JSON '{}': {e}", path.display())))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject batches that cannot be written out safely.
    pub fn validate(&self) -> PlateResult<()> {
        if self.entries.is_empty() {
            return Err(PlateError::validation("batch must contain at least one entry"));
        }

        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            let name = entry.name.as_str();
            check_entry_name(name)?;
            if !seen.insert(name) {
                return Err(PlateError::validation(format!(
                    "duplicate batch entry name '{name}'"
                )));
            }
            if !(entry.params.is_null() || entry.params.is_object()) {
                return Err(PlateError::validation(format!(
                    "batch entry '{name}': params must be a JSON object"
                )));
            }
        }
        Ok(())
    }

    /// Merge every entry's overrides over the defaults.
    pub fn resolve_entries(&self) -> PlateResult<Vec<(String, PlateParams)>> {
        let base = serde_json::to_value(&self.defaults)
            .map_err(|e| PlateError::serde(format!("encode batch defaults: {e}")))?;

        self.entries
            .iter()
            .map(|entry| {
                let mut merged = base.clone();
                merge_json(&mut merged, &entry.params);
                let params = PlateParams::from_value(merged).map_err(|e| {
                    PlateError::serde(format!("batch entry '{}': {e}", entry.name))
                })?;
                Ok((entry.name.clone(), params))
            })
            .collect()
    }
}

/// Generate every entry of `batch`, in entry order.
///
/// With `threading.parallel` the entries are spread over a rayon pool; each entry is still
/// generated sequentially so results match the sequential path exactly.
pub fn generate_batch(
    batch: &BatchFile,
    threading: &RenderThreading,
) -> PlateResult<Vec<BatchOutput>> {
    batch.validate()?;
    let resolved = batch.resolve_entries()?;
    tracing::info!(
        entries = resolved.len(),
        parallel = threading.parallel,
        threads = ?threading.threads,
        "generating batch"
    );

    let run = |(name, params): (String, PlateParams)| {
        tracing::debug!(entry = %name, size = params.size, "generating batch entry");
        let grid = generate(params.clone());
        BatchOutput { name, params, grid }
    };

    if !threading.parallel {
        return Ok(resolved.into_iter().map(run).collect());
    }

    let pool = build_thread_pool(threading.threads)?;
    Ok(pool.install(|| resolved.into_par_iter().map(run).collect()))
}

/// Write each output as `<out_dir>/<name>.png` plus its import sidecar.
///
/// Returns the written PNG paths in output order.
pub fn write_batch(
    outputs: &[BatchOutput],
    import: &ImportSettings,
    out_dir: &Path,
) -> PlateResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(outputs.len());
    for out in outputs {
        check_entry_name(&out.name)?;
        let path = out_dir.join(format!("{}.png", out.name));
        write_png(&out.grid, &path)?;
        write_sidecar(import, &path, out.grid.size())?;
        tracing::info!(path = %path.display(), "wrote batch entry");
        written.push(path);
    }
    Ok(written)
}

/// Entry names become file stems inside the output directory, so they must not be able to
/// escape it.
fn check_entry_name(name: &str) -> PlateResult<()> {
    if name.trim().is_empty() {
        return Err(PlateError::validation("batch entry name must be non-empty"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(PlateError::validation(format!(
            "batch entry name '{name}' must be a plain file stem"
        )));
    }
    Ok(())
}

/// Recursively merge `patch` into `base`. Objects merge key by key; anything else replaces.
fn merge_json(base: &mut serde_json::Value, patch: &serde_json::Value) {
    match (base, patch) {
        (_, serde_json::Value::Null) => {}
        (serde_json::Value::Object(b), serde_json::Value::Object(p)) => {
            for (k, v) in p {
                match b.get_mut(k) {
                    Some(slot) => merge_json(slot, v),
                    None => {
                        b.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        (b, p) => *b = p.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/mod.rs"]
mod tests;

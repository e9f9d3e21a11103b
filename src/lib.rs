//! worklistgen — CSV to IMSLP composer work-list generator.
//!
//! Reads a catalogue CSV (`data/<name>.csv`) and a list configuration
//! (`lists/<name>.json`), formats every work through the per-field wiki
//! markup rules, and writes the assembled table to `output/<name>.txt`.
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//!
//! let output = worklistgen::generate_list(Path::new("."), "michael_haydn").unwrap();
//! println!("Wrote {}", output.display());
//! ```

pub mod catalogue;
pub mod config;
pub mod formatter;
pub mod model;
pub mod renderer;

use std::path::{Path, PathBuf};

pub use catalogue::{load_catalogue, parse_catalogue};
pub use config::{load_config, parse_config};
pub use model::*;
pub use renderer::{render_document, render_row};

/// Filesystem locations for one named list, relative to a root directory.
#[derive(Debug, Clone)]
pub struct ListPaths {
    /// Catalogue CSV: `data/<name>.csv`
    pub data: PathBuf,
    /// List configuration: `lists/<name>.json`
    pub config: PathBuf,
    /// Generated document: `output/<name>.txt`
    pub output: PathBuf,
}

impl ListPaths {
    /// Resolve the data/config/output triple for a list name.
    pub fn resolve(root: &Path, name: &str) -> Self {
        Self {
            data: root.join("data").join(format!("{name}.csv")),
            config: root.join("lists").join(format!("{name}.json")),
            output: root.join("output").join(format!("{name}.txt")),
        }
    }
}

/// Render a named list to a document string without touching the
/// output directory. Fails with "Unknown list" when the data or
/// configuration file is missing.
pub fn render_list(root: &Path, name: &str) -> Result<String, String> {
    let paths = ListPaths::resolve(root, name);

    if !paths.data.is_file() {
        return Err(format!(
            "Unknown list '{name}': no catalogue at {}",
            paths.data.display()
        ));
    }
    if !paths.config.is_file() {
        return Err(format!(
            "Unknown list '{name}': no configuration at {}",
            paths.config.display()
        ));
    }

    let works = load_catalogue(&paths.data)?;
    let config = load_config(&paths.config)?;
    log::debug!("Loaded {} works for list '{name}'", works.len());

    Ok(render_document(&works, &config))
}

/// Generate a named list end to end: load, render, and write the
/// document to `output/<name>.txt`. Returns the output path.
///
/// The document is fully assembled in memory before the file is
/// created, so no failure can leave partial output behind.
pub fn generate_list(root: &Path, name: &str) -> Result<PathBuf, String> {
    let document = render_list(root, name)?;
    let paths = ListPaths::resolve(root, name);

    if let Some(dir) = paths.output.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create output directory '{}': {e}", dir.display()))?;
    }
    std::fs::write(&paths.output, &document)
        .map_err(|e| format!("Failed to write '{}': {e}", paths.output.display()))?;

    Ok(paths.output)
}

//! Source image discovery and decoding

use std::path::{Path, PathBuf};

use glob::glob;
use image::RgbaImage;

use crate::error::PackError;

/// A decoded source image with its stable load-order index.
///
/// The index is assigned once, after decode, and carried through every
/// downstream structure so re-sorting for manifest output can never
/// desynchronize from the pixel data.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub index: usize,
    /// Source filename (no directory component)
    pub name: String,
    pub image: RgbaImage,
}

/// Find all PNG files directly under `dir`, sorted lexicographically.
pub fn find_png_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let dir_str = dir.display().to_string();

    if let Ok(paths) = glob(&format!("{}/*.png", dir_str)) {
        files.extend(paths.filter_map(Result::ok));
    }

    files.sort();
    files
}

/// Decode every PNG under `dir` into RGBA, in sorted filename order.
///
/// A file that fails to decode is reported on stderr and skipped; it never
/// occupies a grid slot. Indices are contiguous from 0 over the survivors.
pub fn load_directory(dir: &Path) -> Vec<SourceImage> {
    let mut sources = Vec::new();

    for path in find_png_files(dir) {
        match image::open(&path) {
            Ok(img) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                sources.push(SourceImage {
                    index: sources.len(),
                    name,
                    image: img.to_rgba8(),
                });
            }
            Err(e) => {
                let err = PackError::Decode {
                    path: path.clone(),
                    source: e,
                };
                eprintln!("Warning: skipping file: {}", err);
            }
        }
    }

    sources
}

//! The packing pipeline: load -> scale -> layout -> {compose, manifest}

use std::path::Path;

use image::RgbaImage;

use crate::config::PackConfig;
use crate::error::PackError;
use crate::layout;
use crate::loader::{self, SourceImage};
use crate::manifest::Manifest;
use crate::scale;
use crate::spritesheet;

/// Output of a packing run, produced fully in memory before anything is
/// written. The sheet is immutable from here on.
#[derive(Debug)]
pub struct PackOutput {
    pub sheet: RgbaImage,
    pub manifest: Manifest,
}

/// Pack every PNG in `dir` into a spritesheet and manifest.
///
/// `sheet_name` is the sheet filename recorded in the manifest header.
pub fn pack_directory(
    dir: &Path,
    config: &PackConfig,
    sheet_name: &str,
) -> Result<PackOutput, PackError> {
    config.validate()?;
    let sources = loader::load_directory(dir);
    pack_images(&sources, config, sheet_name)
}

/// Pack already-decoded images.
///
/// The compositor and the manifest builder both consume the same layout
/// instance, which keeps pixel data and manifest coordinates consistent.
pub fn pack_images(
    sources: &[SourceImage],
    config: &PackConfig,
    sheet_name: &str,
) -> Result<PackOutput, PackError> {
    config.validate()?;
    if sources.is_empty() {
        return Err(PackError::EmptyInput);
    }

    let sprites = scale::scale_sprites(sources, config.scale_factor)?;
    let layout = layout::compute_layout(&sprites, config.columns)?;
    let sheet = spritesheet::compose_sheet(&layout, &sprites);
    let manifest = Manifest::build(&layout, config, sheet_name);

    Ok(PackOutput { sheet, manifest })
}

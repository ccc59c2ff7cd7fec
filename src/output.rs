//! Artifact output - PNG encoding and manifest writing

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::error::PackError;
use crate::manifest::ManifestFormat;
use crate::pack::PackOutput;

/// Save an RGBA image to a PNG file, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), PackError> {
    create_parent(path)?;
    image.save(path)?;
    Ok(())
}

/// Write the spritesheet and its manifest.
///
/// The manifest is rendered before the sheet is encoded, so a serialization
/// failure leaves the filesystem untouched and the two artifacts appear
/// together or not at all.
pub fn write_outputs(
    output: &PackOutput,
    sheet_path: &Path,
    manifest_path: &Path,
    format: ManifestFormat,
) -> Result<(), PackError> {
    let manifest = output.manifest.render(format)?;

    save_png(&output.sheet, sheet_path)?;
    create_parent(manifest_path)?;
    fs::write(manifest_path, manifest)?;
    Ok(())
}

fn create_parent(path: &Path) -> Result<(), PackError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_save_png_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/sheet.png");
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));

        save_png(&img, &path).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(reloaded, img);
    }
}

//! Pack command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::config::PackConfig;
use crate::loader;
use crate::manifest::ManifestFormat;
use crate::output;
use crate::pack;

/// Execute the pack command
pub fn run_pack(
    input: &Path,
    output: Option<&Path>,
    manifest: Option<&Path>,
    columns: u32,
    scale: f64,
    format: &str,
) -> ExitCode {
    let Some(format) = ManifestFormat::parse(format) else {
        eprintln!("Error: unknown manifest format '{}' (expected 'text' or 'json')", format);
        return ExitCode::from(EXIT_INVALID_ARGS);
    };

    let config = PackConfig {
        columns,
        scale_factor: scale,
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    if !input.is_dir() {
        eprintln!("Error: '{}' is not a directory", input.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let sheet_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("spritesheet.png"));
    let manifest_path = manifest
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_manifest_path(&sheet_path, format));
    let sheet_name = sheet_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "spritesheet.png".to_string());

    let files = loader::find_png_files(input);
    println!("Found {} PNG files:", files.len());
    for file in &files {
        println!("  - {}", file.file_name().unwrap_or_default().to_string_lossy());
    }

    let sources = loader::load_directory(input);
    let result = match pack::pack_images(&sources, &config, &sheet_name) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Per-sprite scaled dimensions, in load order
    for src in &sources {
        if let Some(record) = result.manifest.sprites.iter().find(|r| r.filename == src.name) {
            println!(
                "Loaded {}: {}x{} -> {}x{}",
                src.name,
                src.image.width(),
                src.image.height(),
                record.width,
                record.height
            );
        }
    }

    if let Err(e) = output::write_outputs(&result, &sheet_path, &manifest_path, format) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    // Print summary
    println!(
        "Packed {} sprites into {} ({}x{}, {} columns)",
        result.manifest.sprites.len(),
        sheet_path.display(),
        result.sheet.width(),
        result.sheet.height(),
        columns
    );
    println!("Manifest: {}", manifest_path.display());

    ExitCode::from(EXIT_SUCCESS)
}

/// Derive the manifest path from the sheet path: `sheet.png` becomes
/// `sheet_manifest.txt` (or `.json`).
fn default_manifest_path(sheet_path: &Path, format: ManifestFormat) -> PathBuf {
    let stem = sheet_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "spritesheet".to_string());
    sheet_path.with_file_name(format!("{}_manifest.{}", stem, format.extension()))
}

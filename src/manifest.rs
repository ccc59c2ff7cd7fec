//! Position manifest - serialized description of every sprite on the sheet
//!
//! The manifest carries the same placement data in three redundant views:
//! a per-sprite record list, a row-grouped array of (x, y) pairs, and four
//! flat parallel arrays aligned by manifest index. Records are sorted by
//! (row, column); consumers must address sprites through the manifest's own
//! index, never the load order.

use serde::Serialize;

use crate::config::PackConfig;
use crate::error::PackError;
use crate::layout::GridLayout;

/// One sprite's entry in the manifest.
#[derive(Debug, Clone, Serialize)]
pub struct SpriteRecord {
    pub filename: String,
    pub col: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Complete manifest for one packing run.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    /// Filename of the composited sheet this manifest describes
    pub sheet: String,
    pub columns: u32,
    pub scale_factor: f64,
    /// Per-sprite records sorted by (row, col)
    pub sprites: Vec<SpriteRecord>,
    /// Row-grouped (x, y) pairs, ascending column order within each row
    pub rows: Vec<Vec<(u32, u32)>>,
    /// Flat arrays aligned by manifest index
    pub x_positions: Vec<u32>,
    pub y_positions: Vec<u32>,
    pub widths: Vec<u32>,
    pub heights: Vec<u32>,
}

/// Output format for the manifest artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Text,
    Json,
}

impl ManifestFormat {
    /// Parse a CLI format name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// File extension for the default manifest path.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

impl Manifest {
    /// Build the manifest from a finished layout.
    ///
    /// The layout's cells are re-sorted by (row, col); the stable index each
    /// placement carries keeps the records tied to the right pixel data.
    pub fn build(layout: &GridLayout, config: &PackConfig, sheet_name: &str) -> Self {
        let mut sorted: Vec<_> = layout.cells.iter().collect();
        sorted.sort_by_key(|c| (c.row, c.col));

        let sprites: Vec<SpriteRecord> = sorted
            .iter()
            .map(|c| SpriteRecord {
                filename: c.name.clone(),
                col: c.col,
                row: c.row,
                x: c.x,
                y: c.y,
                width: c.width,
                height: c.height,
            })
            .collect();

        let rows: Vec<Vec<(u32, u32)>> = (0..layout.row_heights.len() as u32)
            .map(|r| {
                sprites
                    .iter()
                    .filter(|s| s.row == r)
                    .map(|s| (s.x, s.y))
                    .collect()
            })
            .collect();

        Manifest {
            sheet: sheet_name.to_string(),
            columns: layout.columns,
            scale_factor: config.scale_factor,
            x_positions: sprites.iter().map(|s| s.x).collect(),
            y_positions: sprites.iter().map(|s| s.y).collect(),
            widths: sprites.iter().map(|s| s.width).collect(),
            heights: sprites.iter().map(|s| s.height).collect(),
            sprites,
            rows,
        }
    }

    /// Render in the requested format.
    pub fn render(&self, format: ManifestFormat) -> Result<String, PackError> {
        match format {
            ManifestFormat::Text => Ok(self.to_text()),
            ManifestFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Render the manifest text artifact.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Spritesheet: {}", self.sheet));
        lines.push(format!("Grid layout: {} columns per row", self.columns));
        lines.push(format!("Scale factor: {}", format_scale(self.scale_factor)));
        lines.push(format!("Total sprites: {}", self.sprites.len()));

        lines.push(String::new());
        lines.push("Sprite positions (filename, column, row, x, y, width, height):".to_string());
        for s in &self.sprites {
            lines.push(format!(
                "{}: col={}, row={}, x={}, y={}, width={}, height={}",
                s.filename, s.col, s.row, s.x, s.y, s.width, s.height
            ));
        }

        lines.push(String::new());
        lines.push(String::new());
        lines.push("Arrays for easy iteration:".to_string());
        lines.push("# By row and column".to_string());
        lines.push("sprite_grid = [".to_string());
        for (r, row) in self.rows.iter().enumerate() {
            lines.push(format!("  # Row {}", r));
            if !row.is_empty() {
                let pairs: Vec<String> =
                    row.iter().map(|(x, y)| format!("({}, {})", x, y)).collect();
                lines.push(format!("  [{}],", pairs.join(", ")));
            }
        }
        lines.push("]".to_string());

        lines.push(String::new());
        lines.push("# Flat arrays (all sprites in order)".to_string());
        self.push_flat_array(&mut lines, "sprite_x_positions", |s| s.x);
        lines.push(String::new());
        self.push_flat_array(&mut lines, "sprite_y_positions", |s| s.y);
        lines.push(String::new());
        self.push_flat_array(&mut lines, "sprite_widths", |s| s.width);
        lines.push(String::new());
        self.push_flat_array(&mut lines, "sprite_heights", |s| s.height);

        lines.join("\n")
    }

    fn push_flat_array(
        &self,
        lines: &mut Vec<String>,
        name: &str,
        value: impl Fn(&SpriteRecord) -> u32,
    ) {
        lines.push(format!("{} = [", name));
        for s in &self.sprites {
            lines.push(format!("    {},  # {}", value(s), s.filename));
        }
        lines.push("]".to_string());
    }
}

/// Display a scale factor with at least one decimal place, so integral
/// factors render as `1.0` rather than `1`.
fn format_scale(factor: f64) -> String {
    if factor.fract() == 0.0 {
        format!("{:.1}", factor)
    } else {
        factor.to_string()
    }
}

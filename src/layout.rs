//! Grid layout computation - row heights, column widths, and sprite placement
//!
//! Layout is two-pass by design: pass 1 sizes every row and column from all
//! sprites, pass 2 derives positions purely from those tables. Positions can
//! never be computed in a single forward scan because a later row may widen
//! an earlier column.

use crate::error::PackError;
use crate::scale::ScaledSprite;

/// The (column, row) slot a sprite occupies, derived from its linear index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub col: u32,
    pub row: u32,
}

/// Map a linear load-order index to its grid slot.
pub fn grid_position(index: usize, columns: u32) -> GridPosition {
    GridPosition {
        col: index as u32 % columns,
        row: index as u32 / columns,
    }
}

/// One sprite's resolved placement: grid slot, absolute position (centering
/// offset already applied), and scaled size. Kept in load-index order.
#[derive(Debug, Clone)]
pub struct CellPlacement {
    pub index: usize,
    pub name: String,
    pub col: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Complete layout for one packing run. Immutable once computed; the
/// compositor and the manifest builder must consume the same instance.
#[derive(Debug, Clone)]
pub struct GridLayout {
    pub columns: u32,
    /// Max sprite height per occupied row
    pub row_heights: Vec<u32>,
    /// Max sprite width per column, 0 for never-occupied trailing columns
    pub col_widths: Vec<u32>,
    pub total_width: u32,
    pub total_height: u32,
    pub cells: Vec<CellPlacement>,
}

/// Compute the grid layout for a set of scaled sprites.
///
/// # Examples
///
/// ```
/// use gridsheet::layout::compute_layout;
/// use gridsheet::scale::ScaledSprite;
/// use image::RgbaImage;
///
/// // 3 sprites of 4x4 in 2 columns: a 2x2 grid with one empty cell
/// let sprites: Vec<ScaledSprite> = (0..3)
///     .map(|i| ScaledSprite {
///         index: i,
///         name: format!("s{i}.png"),
///         image: RgbaImage::new(4, 4),
///     })
///     .collect();
///
/// let layout = compute_layout(&sprites, 2).unwrap();
/// assert_eq!(layout.total_width, 8);
/// assert_eq!(layout.total_height, 8);
/// assert_eq!((layout.cells[2].x, layout.cells[2].y), (0, 4));
/// ```
pub fn compute_layout(sprites: &[ScaledSprite], columns: u32) -> Result<GridLayout, PackError> {
    if columns == 0 {
        return Err(PackError::InvalidConfig(
            "columns must be at least 1".to_string(),
        ));
    }
    if sprites.is_empty() {
        return Err(PackError::EmptyInput);
    }

    let (row_heights, col_widths) = grid_extents(sprites, columns);
    let cells = place_sprites(sprites, columns, &row_heights, &col_widths);

    Ok(GridLayout {
        columns,
        total_width: col_widths.iter().sum(),
        total_height: row_heights.iter().sum(),
        row_heights,
        col_widths,
        cells,
    })
}

/// Pass 1: size every row and column from the sprites assigned to it.
///
/// A row's height is the max sprite height in that row; a column's width is
/// the max sprite width over all rows. Columns never occupied stay 0.
fn grid_extents(sprites: &[ScaledSprite], columns: u32) -> (Vec<u32>, Vec<u32>) {
    let rows = sprites.len().div_ceil(columns as usize);
    let mut row_heights = vec![0u32; rows];
    let mut col_widths = vec![0u32; columns as usize];

    for (i, sprite) in sprites.iter().enumerate() {
        let pos = grid_position(i, columns);
        let h = &mut row_heights[pos.row as usize];
        *h = (*h).max(sprite.height());
        let w = &mut col_widths[pos.col as usize];
        *w = (*w).max(sprite.width());
    }

    (row_heights, col_widths)
}

/// Pass 2: absolute positions from the sizing tables only.
///
/// Each sprite sits at the prefix sum of column widths / row heights up to
/// its slot, plus a floor-centering offset within its (possibly larger) cell.
fn place_sprites(
    sprites: &[ScaledSprite],
    columns: u32,
    row_heights: &[u32],
    col_widths: &[u32],
) -> Vec<CellPlacement> {
    // Prefix sums: cell origin per column / row
    let mut col_x = Vec::with_capacity(col_widths.len());
    let mut acc = 0u32;
    for w in col_widths {
        col_x.push(acc);
        acc += w;
    }
    let mut row_y = Vec::with_capacity(row_heights.len());
    let mut acc = 0u32;
    for h in row_heights {
        row_y.push(acc);
        acc += h;
    }

    sprites
        .iter()
        .enumerate()
        .map(|(i, sprite)| {
            let pos = grid_position(i, columns);
            let cell_w = col_widths[pos.col as usize];
            let cell_h = row_heights[pos.row as usize];
            let x_offset = (cell_w - sprite.width()) / 2;
            let y_offset = (cell_h - sprite.height()) / 2;

            CellPlacement {
                index: sprite.index,
                name: sprite.name.clone(),
                col: pos.col,
                row: pos.row,
                x: col_x[pos.col as usize] + x_offset,
                y: row_y[pos.row as usize] + y_offset,
                width: sprite.width(),
                height: sprite.height(),
            }
        })
        .collect()
}

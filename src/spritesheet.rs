//! Spritesheet compositing - pastes scaled sprites into their grid cells

use image::{Rgba, RgbaImage};

use crate::layout::GridLayout;
use crate::scale::ScaledSprite;

/// Transparent color used for cell padding
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Composite all sprites into a single sheet.
///
/// Allocates a fully transparent canvas of the layout's total size and
/// raster-copies each sprite at its absolute position. Cells are disjoint by
/// construction, so no pixel is ever written twice and no blending is needed.
///
/// `sprites` must be the same slice the layout was computed from: placements
/// are paired with sprites by slice position, the same order the layout used
/// for grid assignment.
pub fn compose_sheet(layout: &GridLayout, sprites: &[ScaledSprite]) -> RgbaImage {
    let mut sheet = RgbaImage::from_pixel(layout.total_width, layout.total_height, TRANSPARENT);

    for (cell, sprite) in layout.cells.iter().zip(sprites) {
        for y in 0..sprite.height() {
            for x in 0..sprite.width() {
                let pixel = *sprite.image.get_pixel(x, y);
                sheet.put_pixel(cell.x + x, cell.y + y, pixel);
            }
        }
        // Padding around the sprite stays transparent (default from from_pixel)
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;

    fn solid_sprite(index: usize, w: u32, h: u32, color: Rgba<u8>) -> ScaledSprite {
        ScaledSprite {
            index,
            name: format!("sprite_{index}.png"),
            image: RgbaImage::from_pixel(w, h, color),
        }
    }

    #[test]
    fn test_single_sprite_fills_canvas() {
        let red = Rgba([255, 0, 0, 255]);
        let sprites = vec![solid_sprite(0, 3, 3, red)];
        let layout = compute_layout(&sprites, 6).unwrap();
        let sheet = compose_sheet(&layout, &sprites);

        assert_eq!(sheet.width(), 3);
        assert_eq!(sheet.height(), 3);
        assert_eq!(*sheet.get_pixel(0, 0), red);
        assert_eq!(*sheet.get_pixel(2, 2), red);
    }

    #[test]
    fn test_grid_placement() {
        let red = Rgba([255, 0, 0, 255]);
        let green = Rgba([0, 255, 0, 255]);
        let blue = Rgba([0, 0, 255, 255]);

        let sprites = vec![
            solid_sprite(0, 2, 2, red),
            solid_sprite(1, 2, 2, green),
            solid_sprite(2, 2, 2, blue),
        ];
        let layout = compute_layout(&sprites, 2).unwrap();
        let sheet = compose_sheet(&layout, &sprites);

        assert_eq!(sheet.width(), 4);
        assert_eq!(sheet.height(), 4);

        // Row 0: red, green. Row 1: blue, empty cell
        assert_eq!(*sheet.get_pixel(0, 0), red);
        assert_eq!(*sheet.get_pixel(2, 0), green);
        assert_eq!(*sheet.get_pixel(0, 2), blue);
        assert_eq!(*sheet.get_pixel(2, 2), TRANSPARENT);
    }

    #[test]
    fn test_smaller_sprite_centered_with_transparent_padding() {
        let red = Rgba([255, 0, 0, 255]);
        let green = Rgba([0, 255, 0, 255]);

        // Column 0 is 6 wide (from the second row); the 2x2 sprite centers
        // at x=2 within it
        let sprites = vec![solid_sprite(0, 2, 2, red), solid_sprite(1, 6, 2, green)];
        let layout = compute_layout(&sprites, 1).unwrap();
        let sheet = compose_sheet(&layout, &sprites);

        assert_eq!(sheet.width(), 6);
        assert_eq!(sheet.height(), 4);

        assert_eq!(*sheet.get_pixel(0, 0), TRANSPARENT); // Padding
        assert_eq!(*sheet.get_pixel(2, 0), red);
        assert_eq!(*sheet.get_pixel(3, 1), red);
        assert_eq!(*sheet.get_pixel(5, 0), TRANSPARENT); // Padding
        assert_eq!(*sheet.get_pixel(0, 2), green);
        assert_eq!(*sheet.get_pixel(5, 3), green);
    }

    #[test]
    fn test_paste_follows_slice_order() {
        // A sprite's stored index is a stable identifier, not a slice
        // position: compositing must pair cells with sprites positionally
        // even when indices are non-contiguous (e.g. a filtered set).
        let red = Rgba([255, 0, 0, 255]);
        let green = Rgba([0, 255, 0, 255]);

        let sprites = vec![solid_sprite(5, 2, 2, red), solid_sprite(9, 2, 2, green)];
        let layout = compute_layout(&sprites, 2).unwrap();
        let sheet = compose_sheet(&layout, &sprites);

        assert_eq!(sheet.width(), 4);
        assert_eq!(*sheet.get_pixel(0, 0), red);
        assert_eq!(*sheet.get_pixel(2, 0), green);
    }

    #[test]
    fn test_alpha_preserved() {
        let translucent = Rgba([10, 20, 30, 128]);
        let sprites = vec![solid_sprite(0, 2, 2, translucent)];
        let layout = compute_layout(&sprites, 1).unwrap();
        let sheet = compose_sheet(&layout, &sprites);

        assert_eq!(*sheet.get_pixel(1, 1), translucent);
    }
}

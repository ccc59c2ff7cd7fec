//! Uniform sprite scaling

use image::imageops::{self, FilterType};
use image::RgbaImage;
use rayon::prelude::*;

use crate::error::PackError;
use crate::loader::SourceImage;

/// A source image after uniform scaling, keeping its load-order index.
#[derive(Debug, Clone)]
pub struct ScaledSprite {
    pub index: usize,
    pub name: String,
    pub image: RgbaImage,
}

impl ScaledSprite {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Scale every source image by `factor`, preserving input order.
///
/// Sprites are independent during resampling, so the work runs on a parallel
/// iterator; `collect` reassembles results in input order before layout.
///
/// New dimensions are `floor(original * factor)`. A factor that floors either
/// dimension to zero is rejected with [`PackError::InvalidScale`] naming the
/// offending file, rather than silently producing an empty sprite.
pub fn scale_sprites(
    sources: &[SourceImage],
    factor: f64,
) -> Result<Vec<ScaledSprite>, PackError> {
    sources
        .par_iter()
        .map(|src| scale_sprite(src, factor))
        .collect()
}

/// Resample a single image with a Lanczos3 filter.
fn scale_sprite(src: &SourceImage, factor: f64) -> Result<ScaledSprite, PackError> {
    let (w, h) = src.image.dimensions();
    let new_w = (w as f64 * factor).floor() as u32;
    let new_h = (h as f64 * factor).floor() as u32;

    if new_w == 0 || new_h == 0 {
        return Err(PackError::InvalidScale {
            name: src.name.clone(),
            factor,
        });
    }

    // Factor 1.0 is an exact copy; skip the resample pass
    let image = if new_w == w && new_h == h {
        src.image.clone()
    } else {
        imageops::resize(&src.image, new_w, new_h, FilterType::Lanczos3)
    };

    Ok(ScaledSprite {
        index: src.index,
        name: src.name.clone(),
        image,
    })
}

use anyhow::{Context, Result};

use crate::coords::Extent;
use crate::error::{Axis, CropError};

use super::{Edge, PixelCrop};

/// Which texture row is sampled at `v = 0`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TextureOrigin {
    /// Row 0 is the top of the image (uploads straight from a decoded file).
    TopLeft,
    /// Row 0 is the bottom of the image (OpenGL convention).
    #[default]
    BottomLeft,
}

/// Normalized sub-rectangle of a source texture.
///
/// The cropped stage picks `right`/`left` by the sign of `x` and `top`/`bottom`
/// by the sign of `y`. It applies no vertical flip, so `top` must already be
/// expressed in the sampled texture's convention; see [`TextureOrigin`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CropBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for CropBounds {
    fn default() -> Self {
        Self::FULL
    }
}

impl CropBounds {
    /// Whole texture, bottom-left origin.
    pub const FULL: Self = Self::new(0.0, 1.0, 1.0, 0.0);

    #[inline]
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Whole texture in the given origin convention.
    #[inline]
    pub const fn full(origin: TextureOrigin) -> Self {
        match origin {
            TextureOrigin::TopLeft => Self::new(0.0, 1.0, 0.0, 1.0),
            TextureOrigin::BottomLeft => Self::FULL,
        }
    }

    #[inline]
    pub fn get(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    /// Checks that the bounds describe a non-mirrored rectangle inside the
    /// texture.
    ///
    /// Degenerate (zero-width or zero-height) rectangles pass.
    pub fn validate(&self, origin: TextureOrigin) -> Result<(), CropError> {
        for edge in Edge::ALL {
            let value = self.get(edge);
            if !(0.0..=1.0).contains(&value) {
                return Err(CropError::OutOfRange { edge, value });
            }
        }

        if self.left > self.right {
            return Err(CropError::Inverted {
                axis: Axis::Horizontal,
            });
        }

        let vertical_inverted = match origin {
            TextureOrigin::TopLeft => self.top > self.bottom,
            TextureOrigin::BottomLeft => self.bottom > self.top,
        };
        if vertical_inverted {
            return Err(CropError::Inverted {
                axis: Axis::Vertical,
            });
        }

        Ok(())
    }

    /// Converts pixels removed from each image edge into normalized bounds.
    ///
    /// Fails when the image is empty or the crop leaves no pixel behind.
    pub fn from_pixel_crop(image: Extent, crop: PixelCrop, origin: TextureOrigin) -> Result<Self> {
        anyhow::ensure!(
            !image.is_empty(),
            "image has zero size ({}x{})",
            image.width,
            image.height
        );
        anyhow::ensure!(
            !crop.remaining(image).is_empty(),
            "{crop:?} leaves no pixels of a {}x{} image",
            image.width,
            image.height
        );

        let w = image.width as f32;
        let h = image.height as f32;

        let left = crop.left as f32 / w;
        let right = 1.0 - crop.right as f32 / w;
        let (top, bottom) = match origin {
            TextureOrigin::TopLeft => (crop.top as f32 / h, 1.0 - crop.bottom as f32 / h),
            TextureOrigin::BottomLeft => (1.0 - crop.top as f32 / h, crop.bottom as f32 / h),
        };

        let bounds = Self::new(left, right, top, bottom);
        bounds
            .validate(origin)
            .with_context(|| format!("{crop:?} produced invalid bounds {bounds:?}"))?;
        Ok(bounds)
    }
}

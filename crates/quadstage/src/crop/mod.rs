//! Crop rectangles for the cropped vertex stage.
//!
//! `CropBounds` is what the stage consumes: four normalized scalars, one per
//! edge. `PixelCrop` is the integer form an editor manipulates (pixels removed
//! from each edge of the source image) and converts into bounds once the
//! texture's row order is known.

mod bounds;
mod pixel;

pub use bounds::{CropBounds, TextureOrigin};
pub use pixel::PixelCrop;

use std::fmt;

/// One edge of a crop rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

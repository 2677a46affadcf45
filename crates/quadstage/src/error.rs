use std::fmt;

use crate::crop::Edge;

/// Axis of a crop rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Misuse of crop bounds detected before upload.
///
/// The vertex stages themselves never fail; these checks exist for callers
/// that want to reject a crop instead of rendering a mirrored or skewed
/// region.
#[derive(Debug, Clone, PartialEq)]
pub enum CropError {
    /// A bound is NaN, infinite or outside `[0, 1]`.
    OutOfRange { edge: Edge, value: f32 },
    /// The bounds on `axis` are in the wrong order for the texture origin.
    Inverted { axis: Axis },
    /// Vertex `index` carries bounds different from vertex 0.
    NonUniform { index: usize },
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropError::OutOfRange { edge, value } => {
                write!(f, "crop {edge} bound {value} is outside [0, 1]")
            }
            CropError::Inverted { axis } => write!(f, "{axis} crop bounds are inverted"),
            CropError::NonUniform { index } => {
                write!(f, "crop bounds of vertex {index} differ from vertex 0")
            }
        }
    }
}

impl std::error::Error for CropError {}

//! Sub-rectangle stage driven by per-vertex crop bounds.

use crate::coords::{ClipPosition, Uv, Vec2};
use crate::crop::CropBounds;

use super::StageOutput;

/// Picks `right`/`left` by the sign of `x` and `top`/`bottom` by the sign of
/// `y`. Only the signs matter; `0.0` counts as negative.
///
/// Bounds are used as given: inverted bounds mirror the sampled region.
#[inline]
pub fn transform(position: Vec2, crop: &CropBounds) -> StageOutput {
    let u = if position.x > 0.0 { crop.right } else { crop.left };
    let v = if position.y > 0.0 { crop.top } else { crop.bottom };

    StageOutput {
        clip_position: ClipPosition::from_position(position),
        uv: Uv::new(u, v),
    }
}

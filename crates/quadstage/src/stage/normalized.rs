//! Full-frame stage without flip.

use crate::coords::{ClipPosition, Uv, Vec2};

use super::StageOutput;

const SCALE: f32 = 0.5;
const BIAS: f32 = 0.5;

/// `uv = position * 0.5 + 0.5`, valid for any point of the quad, not only
/// corners.
#[inline]
pub fn transform(position: Vec2) -> StageOutput {
    StageOutput {
        clip_position: ClipPosition::from_position(position),
        uv: Uv::new(position.x * SCALE + BIAS, position.y * SCALE + BIAS),
    }
}

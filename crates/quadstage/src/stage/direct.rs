//! Full-frame stage with vertical flip.

use crate::coords::{ClipPosition, Uv, Vec2};

use super::StageOutput;

/// `u = 1` right of center, `v = 0` above center; `0` and `1` otherwise.
///
/// Comparisons are strict: a coordinate of exactly `0.0` lands on the
/// `u = 0` / `v = 1` side.
#[inline]
pub fn transform(position: Vec2) -> StageOutput {
    let u = if position.x > 0.0 { 1.0 } else { 0.0 };
    let v = if position.y > 0.0 { 0.0 } else { 1.0 };

    StageOutput {
        clip_position: ClipPosition::from_position(position),
        uv: Uv::new(u, v),
    }
}

//! Coordinate types passed between pipeline stages.
//!
//! Clip space:
//! - Origin at the center of the target
//! - +X right, +Y up
//! - Visible range `[-1, 1]` per axis
//!
//! Texture space (UV) is `[0, 1]²`; which row is `v = 0` depends on the
//! stage, see [`crate::stage`].

mod clip;
mod extent;
mod vec2;

pub use clip::{ClipPosition, Uv};
pub use extent::Extent;
pub use vec2::Vec2;

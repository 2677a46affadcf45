//! Quad vertex stages.
//!
//! Maps the four corners of a full-screen or overlay quad to clip space and
//! texture coordinates. Three stages are available, selected per draw:
//!
//! - [`VertexStage::DirectPassthrough`]: whole texture, V flipped.
//! - [`VertexStage::Cropped`]: sub-rectangle given by per-vertex crop bounds.
//! - [`VertexStage::Normalized`]: whole texture, affine, no flip.
//!
//! `stage` holds CPU reference implementations, `shader` the matching WGSL
//! modules and wgpu vertex layouts. Buffer upload and draw submission are left
//! to the caller.

pub mod coords;
pub mod crop;
pub mod error;
pub mod logging;
pub mod quad;
pub mod shader;
pub mod stage;

pub use crop::{CropBounds, PixelCrop, TextureOrigin};
pub use error::CropError;
pub use shader::{StageConfig, StageShader};
pub use stage::{StageOutput, VertexInput, VertexStage};

//! GPU descriptions of the vertex stages.
//!
//! Each stage ships as its own WGSL module with entry point `vs_main`. All of
//! them read `position` from buffer slot 0 at `@location(0)` and write `uv` to
//! `@location(0)`, so a caller can swap stages per draw without rebinding
//! geometry. The cropped stage additionally reads buffer slot 1
//! (`@location(1..=4)`, see [`crate::quad::CropVertex`]).
//!
//! This module only builds descriptors. Creating the shader module, the
//! pipeline and issuing draws belongs to the caller.

mod config;
mod stage_shader;

pub use config::{CropRate, StageConfig};
pub use stage_shader::StageShader;

use crate::stage::VertexStage;

pub const ENTRY_POINT: &str = "vs_main";

/// Buffer slot holding [`crate::quad::QuadVertex`].
pub const POSITION_SLOT: u32 = 0;

/// Buffer slot holding [`crate::quad::CropVertex`].
pub const CROP_SLOT: u32 = 1;

/// WGSL source of `stage`.
pub const fn wgsl_source(stage: VertexStage) -> &'static str {
    match stage {
        VertexStage::DirectPassthrough => include_str!("shaders/direct.wgsl"),
        VertexStage::Cropped => include_str!("shaders/cropped.wgsl"),
        VertexStage::Normalized => include_str!("shaders/normalized.wgsl"),
    }
}

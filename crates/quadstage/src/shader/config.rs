/// How often the cropped stage's bounds advance.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CropRate {
    /// One [`crate::quad::CropVertex`] per corner (four identical entries).
    #[default]
    PerVertex,
    /// One [`crate::quad::CropVertex`] per instance; the WGSL is unchanged.
    PerInstance,
}

impl CropRate {
    #[inline]
    pub fn step_mode(self) -> wgpu::VertexStepMode {
        match self {
            CropRate::PerVertex => wgpu::VertexStepMode::Vertex,
            CropRate::PerInstance => wgpu::VertexStepMode::Instance,
        }
    }
}

/// Options for building a [`super::StageShader`].
///
/// Defaults match the per-vertex attribute contract. Only add fields when a
/// caller needs a different binding.
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Step mode of the crop buffer. Ignored by stages without crop input.
    pub crop_rate: CropRate,

    /// Prefix for wgpu debug labels (`"<prefix> <stage> vs"`).
    pub label_prefix: String,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            crop_rate: CropRate::PerVertex,
            label_prefix: String::from("quadstage"),
        }
    }
}

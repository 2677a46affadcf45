use std::borrow::Cow;

use crate::quad::{CropVertex, QuadVertex};
use crate::stage::VertexStage;

use super::{ENTRY_POINT, StageConfig, wgsl_source};

/// Everything a caller needs to build the vertex half of a render pipeline
/// for one stage.
#[derive(Debug, Clone)]
pub struct StageShader {
    stage: VertexStage,
    label: String,
    buffers: Vec<wgpu::VertexBufferLayout<'static>>,
}

impl StageShader {
    pub fn new(stage: VertexStage, config: &StageConfig) -> Self {
        let mut buffers = vec![QuadVertex::layout()];
        if stage == VertexStage::Cropped {
            buffers.push(CropVertex::layout(config.crop_rate.step_mode()));
        }

        let label = format!("{} {stage} vs", config.label_prefix);
        log::debug!(
            "building {label}: {} vertex buffer(s), crop rate {:?}",
            buffers.len(),
            config.crop_rate
        );

        Self {
            stage,
            label,
            buffers,
        }
    }

    #[inline]
    pub fn stage(&self) -> VertexStage {
        self.stage
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn entry_point(&self) -> &'static str {
        ENTRY_POINT
    }

    #[inline]
    pub fn source(&self) -> &'static str {
        wgsl_source(self.stage)
    }

    /// Vertex buffer layouts, indexed by buffer slot.
    #[inline]
    pub fn buffers(&self) -> &[wgpu::VertexBufferLayout<'static>] {
        &self.buffers
    }

    /// Descriptor for `wgpu::Device::create_shader_module`.
    pub fn descriptor(&self) -> wgpu::ShaderModuleDescriptor<'_> {
        wgpu::ShaderModuleDescriptor {
            label: Some(self.label.as_str()),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(self.source())),
        }
    }

    /// Vertex state for `wgpu::RenderPipelineDescriptor::vertex`.
    ///
    /// `module` must have been created from [`Self::descriptor`].
    pub fn vertex_state<'a>(&'a self, module: &'a wgpu::ShaderModule) -> wgpu::VertexState<'a> {
        wgpu::VertexState {
            module,
            entry_point: Some(ENTRY_POINT),
            compilation_options: Default::default(),
            buffers: &self.buffers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{CROP_SLOT, CropRate, POSITION_SLOT};

    fn shader(stage: VertexStage) -> StageShader {
        StageShader::new(stage, &StageConfig::default())
    }

    #[test]
    fn every_stage_binds_position_at_slot_zero() {
        for stage in VertexStage::ALL {
            let s = shader(stage);
            let layout = &s.buffers()[POSITION_SLOT as usize];
            assert_eq!(layout.attributes, &QuadVertex::ATTRS[..], "{stage}");
            assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
            assert!(s.source().contains("@location(0) position: vec2<f32>"), "{stage}");
        }
    }

    #[test]
    fn only_cropped_has_crop_buffer() {
        assert_eq!(shader(VertexStage::DirectPassthrough).buffers().len(), 1);
        assert_eq!(shader(VertexStage::Normalized).buffers().len(), 1);

        let cropped = shader(VertexStage::Cropped);
        assert_eq!(cropped.buffers().len(), 2);
        assert_eq!(cropped.buffers()[CROP_SLOT as usize].attributes, &CropVertex::ATTRS[..]);
    }

    #[test]
    fn cropped_source_declares_crop_locations() {
        let src = shader(VertexStage::Cropped).source();
        let fields = [
            (1, "crop_left"),
            (2, "crop_right"),
            (3, "crop_top"),
            (4, "crop_bottom"),
        ];
        for (loc, name) in fields {
            assert!(src.contains(&format!("@location({loc}) {name}: f32")), "{name}");
        }
    }

    #[test]
    fn crop_rate_sets_step_mode() {
        let config = StageConfig {
            crop_rate: CropRate::PerInstance,
            ..StageConfig::default()
        };
        let s = StageShader::new(VertexStage::Cropped, &config);
        assert_eq!(s.buffers()[CROP_SLOT as usize].step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(s.buffers()[POSITION_SLOT as usize].step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn sources_export_entry_point() {
        for stage in VertexStage::ALL {
            let s = shader(stage);
            assert!(s.source().contains(&format!("fn {}(", s.entry_point())), "{stage}");
            assert!(s.source().contains("@vertex"));
            assert!(s.source().contains("@location(0) uv: vec2<f32>"));
        }
    }

    #[test]
    fn descriptor_carries_label_and_wgsl() {
        let s = shader(VertexStage::Normalized);
        let desc = s.descriptor();
        assert_eq!(desc.label, Some("quadstage normalized vs"));
        match desc.source {
            wgpu::ShaderSource::Wgsl(src) => assert_eq!(src, s.source()),
            _ => panic!("expected WGSL source"),
        }
    }
}

use bytemuck::{Pod, Zeroable};

use crate::crop::CropBounds;
use crate::error::CropError;

// ── position (buffer slot 0) ──────────────────────────────────────────────

/// Position attribute shared by every stage.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2], // clip space
}

impl QuadVertex {
    pub const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── crop bounds (buffer slot 1, cropped stage only) ───────────────────────

/// Crop attributes read by the cropped stage.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CropVertex {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl CropVertex {
    pub const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32, // crop_left
        2 => Float32, // crop_right
        3 => Float32, // crop_top
        4 => Float32  // crop_bottom
    ];

    pub fn layout(step_mode: wgpu::VertexStepMode) -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CropVertex>() as u64,
            step_mode,
            attributes: &Self::ATTRS,
        }
    }

    #[inline]
    pub fn bounds(&self) -> CropBounds {
        CropBounds::new(self.left, self.right, self.top, self.bottom)
    }
}

impl From<CropBounds> for CropVertex {
    #[inline]
    fn from(b: CropBounds) -> Self {
        Self {
            left: b.left,
            right: b.right,
            top: b.top,
            bottom: b.bottom,
        }
    }
}

/// Same bounds on all four corners, ready for a per-vertex crop buffer.
#[inline]
pub fn crop_vertices(bounds: CropBounds) -> [CropVertex; 4] {
    [CropVertex::from(bounds); 4]
}

/// Reports the first vertex whose bounds differ from vertex 0.
///
/// The cropped stage treats every vertex independently; differing bounds
/// across one quad sample a non-rectangular region.
///
/// Bounds are compared bit for bit, so NaN matches an identical NaN. Range
/// problems are [`CropBounds::validate`]'s job.
pub fn check_uniform(vertices: &[CropVertex]) -> Result<(), CropError> {
    let Some(first) = vertices.first() else { return Ok(()) };
    let first = bytemuck::bytes_of(first);
    match vertices.iter().position(|v| bytemuck::bytes_of(v) != first) {
        Some(index) => Err(CropError::NonUniform { index }),
        None => Ok(()),
    }
}

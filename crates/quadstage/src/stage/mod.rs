//! Vertex stages: quad position → clip position + UV.
//!
//! Three interchangeable stages share one input binding (`position`) and one
//! output shape ([`StageOutput`]). Each function mirrors its WGSL module in
//! [`crate::shader`] expression for expression.
//!
//! Vertical convention differs per stage:
//! - `DirectPassthrough` flips V (`y > 0` samples row `v = 0`).
//! - `Cropped` uses whatever convention the crop bounds are expressed in.
//! - `Normalized` does not flip (`y = 1` samples `v = 1`).

pub mod cropped;
pub mod direct;
pub mod normalized;

use std::fmt;

use crate::coords::{ClipPosition, Uv, Vec2};
use crate::crop::CropBounds;

/// Per-vertex attributes as bound by the caller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexInput {
    pub position: Vec2,
    /// Read by [`VertexStage::Cropped`] only.
    pub crop: CropBounds,
}

impl VertexInput {
    #[inline]
    pub const fn new(position: Vec2) -> Self {
        Self {
            position,
            crop: CropBounds::FULL,
        }
    }

    #[inline]
    pub const fn with_crop(position: Vec2, crop: CropBounds) -> Self {
        Self { position, crop }
    }
}

/// Values handed to the interpolator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StageOutput {
    pub clip_position: ClipPosition,
    pub uv: Uv,
}

/// The closed set of vertex stages a draw can select.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum VertexStage {
    /// Corner classifier with a fixed vertical flip.
    #[default]
    DirectPassthrough,
    /// Corner classifier selecting caller-supplied crop bounds.
    Cropped,
    /// Continuous affine remap, no flip.
    Normalized,
}

impl VertexStage {
    pub const ALL: [VertexStage; 3] = [
        VertexStage::DirectPassthrough,
        VertexStage::Cropped,
        VertexStage::Normalized,
    ];

    /// Runs the stage for one vertex.
    #[inline]
    pub fn transform(self, input: &VertexInput) -> StageOutput {
        match self {
            VertexStage::DirectPassthrough => direct::transform(input.position),
            VertexStage::Cropped => cropped::transform(input.position, &input.crop),
            VertexStage::Normalized => normalized::transform(input.position),
        }
    }

    /// Whether the stage bakes in a vertical flip relative to `(p + 1) / 2`.
    ///
    /// `Cropped` reports `false`: any flip lives in the bounds it is given.
    #[inline]
    pub const fn flips_v(self) -> bool {
        matches!(self, VertexStage::DirectPassthrough)
    }

    /// Whether UVs are only correct at exact quad corners.
    ///
    /// Corner classifiers rely on the rasterizer to interpolate between the
    /// four corners; interior vertices snap to a corner UV.
    #[inline]
    pub const fn is_corner_classifier(self) -> bool {
        !matches!(self, VertexStage::Normalized)
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            VertexStage::DirectPassthrough => "direct",
            VertexStage::Cropped => "cropped",
            VertexStage::Normalized => "normalized",
        }
    }
}

impl fmt::Display for VertexStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quad::QUAD_VERTICES;

    fn corners() -> impl Iterator<Item = Vec2> {
        QUAD_VERTICES.iter().map(|v| Vec2::from(v.position))
    }

    #[test]
    fn every_stage_passes_clip_position_through() {
        let crop = CropBounds::new(0.1, 0.9, 0.8, 0.2);
        let samples = [
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(-0.3, 0.7),
            Vec2::new(0.5, -0.25),
        ];
        for stage in VertexStage::ALL {
            for p in samples {
                let out = stage.transform(&VertexInput::with_crop(p, crop));
                assert_eq!(
                    out.clip_position.to_array(),
                    [p.x, p.y, 0.0, 1.0],
                    "{stage} at {p:?}"
                );
            }
        }
    }

    #[test]
    fn dispatch_matches_free_functions() {
        let crop = CropBounds::new(0.25, 0.75, 0.6, 0.4);
        for p in corners() {
            let input = VertexInput::with_crop(p, crop);
            assert_eq!(VertexStage::DirectPassthrough.transform(&input), direct::transform(p));
            assert_eq!(VertexStage::Cropped.transform(&input), cropped::transform(p, &crop));
            assert_eq!(VertexStage::Normalized.transform(&input), normalized::transform(p));
        }
    }

    #[test]
    fn direct_and_normalized_disagree_on_v_only() {
        // The two full-frame stages use opposite vertical conventions on
        // purpose; U agrees at every corner, V is mirrored.
        for p in corners() {
            let d = direct::transform(p).uv;
            let n = normalized::transform(p).uv;
            assert_eq!(d.u, n.u, "u at {p:?}");
            assert_eq!(d.v, 1.0 - n.v, "v at {p:?}");
        }
        assert!(VertexStage::DirectPassthrough.flips_v());
        assert!(!VertexStage::Normalized.flips_v());
    }

    #[test]
    fn cropped_with_full_bounds_matches_normalized_at_corners() {
        for p in corners() {
            let input = VertexInput::new(p);
            assert_eq!(
                VertexStage::Cropped.transform(&input).uv,
                VertexStage::Normalized.transform(&input).uv
            );
        }
    }

    #[test]
    fn direct_ignores_crop_bounds() {
        let p = Vec2::new(1.0, -1.0);
        let a = VertexStage::DirectPassthrough.transform(&VertexInput::new(p));
        let b = VertexStage::DirectPassthrough
            .transform(&VertexInput::with_crop(p, CropBounds::new(0.3, 0.4, 0.5, 0.6)));
        assert_eq!(a, b);
    }

    #[test]
    fn only_normalized_is_continuous() {
        assert!(VertexStage::DirectPassthrough.is_corner_classifier());
        assert!(VertexStage::Cropped.is_corner_classifier());
        assert!(!VertexStage::Normalized.is_corner_classifier());
    }
}

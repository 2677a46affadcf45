use crate::coords::{Extent, Vec2};

use super::{QUAD_VERTICES, QuadVertex};

/// Half-extent of a quad that shows `image` at 1:1 pixel scale inside
/// `target`, in clip units.
///
/// Each axis shrinks to `image / target` when the image fits, and stays at
/// `1.0` (full target) when it does not. An empty target yields `1.0`.
pub fn fit_extent(image: Extent, target: Extent) -> Vec2 {
    fn axis(image: u32, target: u32) -> f32 {
        if target == 0 || image > target {
            1.0
        } else {
            image as f32 / target as f32
        }
    }

    Vec2::new(
        axis(image.width, target.width),
        axis(image.height, target.height),
    )
}

/// Quad corners centered in `target`, scaled by [`fit_extent`].
///
/// Corner signs are preserved, so the corner-classifier stages still assign
/// full-corner UVs. The normalized stage does not: it would sample only the
/// middle of the texture.
pub fn fitted_quad(image: Extent, target: Extent) -> [QuadVertex; 4] {
    let extent = fit_extent(image, target);
    QUAD_VERTICES.map(|v| QuadVertex {
        position: (Vec2::from(v.position) * extent).to_array(),
    })
}

use super::Vec2;

/// Homogeneous clip-space position emitted by every vertex stage.
///
/// Stages never write depth or perspective: `z` is always `0.0` and `w` is
/// always `1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl ClipPosition {
    /// Lifts a 2D position onto the `z = 0` plane with `w = 1`.
    #[inline]
    pub const fn from_position(position: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: 0.0,
            w: 1.0,
        }
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

/// Texture-sampling coordinate handed to the interpolator.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Uv {
    pub u: f32,
    pub v: f32,
}

impl Uv {
    #[inline]
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.u, self.v]
    }
}

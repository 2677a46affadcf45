use crate::coords::Extent;

use super::Edge;

/// Pixels removed from each edge of a source image.
///
/// Edits through [`PixelCrop::grow`] never remove the last remaining column
/// or row, so a crop built that way always converts into non-empty bounds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PixelCrop {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl PixelCrop {
    pub const NONE: Self = Self {
        left: 0,
        right: 0,
        top: 0,
        bottom: 0,
    };

    #[inline]
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    #[inline]
    pub fn get(&self, edge: Edge) -> u32 {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    fn get_mut(&mut self, edge: Edge) -> &mut u32 {
        match edge {
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
        }
    }

    /// Size of the image left after cropping (saturating at zero).
    pub fn remaining(&self, image: Extent) -> Extent {
        Extent::new(
            image
                .width
                .saturating_sub(self.left.saturating_add(self.right)),
            image
                .height
                .saturating_sub(self.top.saturating_add(self.bottom)),
        )
    }

    /// Removes up to `delta` more pixels at `edge`, keeping at least one
    /// column/row of `image`. Returns the number of pixels actually removed.
    pub fn grow(&mut self, edge: Edge, delta: u32, image: Extent) -> u32 {
        let remaining = self.remaining(image);
        let room = match edge {
            Edge::Left | Edge::Right => remaining.width,
            Edge::Top | Edge::Bottom => remaining.height,
        }
        .saturating_sub(1);

        let applied = delta.min(room);
        if applied < delta {
            log::trace!("crop {edge} clamped: requested {delta}, applied {applied}");
        }
        *self.get_mut(edge) += applied;
        applied
    }

    /// Gives back up to `delta` pixels at `edge`. Returns the number restored.
    pub fn shrink(&mut self, edge: Edge, delta: u32) -> u32 {
        let amount = self.get_mut(edge);
        let applied = delta.min(*amount);
        *amount -= applied;
        applied
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::NONE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: Extent = Extent::new(10, 8);

    #[test]
    fn grow_applies_full_delta_when_room() {
        let mut c = PixelCrop::NONE;
        assert_eq!(c.grow(Edge::Left, 3, IMAGE), 3);
        assert_eq!(c.left, 3);
        assert_eq!(c.remaining(IMAGE), Extent::new(7, 8));
    }

    #[test]
    fn grow_keeps_last_column() {
        let mut c = PixelCrop { left: 4, ..PixelCrop::NONE };
        assert_eq!(c.grow(Edge::Right, 10, IMAGE), 5);
        assert_eq!(c.remaining(IMAGE).width, 1);
        assert_eq!(c.grow(Edge::Left, 1, IMAGE), 0);
    }

    #[test]
    fn grow_keeps_last_row() {
        let mut c = PixelCrop::NONE;
        c.grow(Edge::Top, 100, IMAGE);
        assert_eq!(c.top, 7);
        assert_eq!(c.grow(Edge::Bottom, 1, IMAGE), 0);
        assert_eq!(c.remaining(IMAGE).height, 1);
    }

    #[test]
    fn grow_on_empty_image_is_noop() {
        let mut c = PixelCrop::NONE;
        assert_eq!(c.grow(Edge::Left, 5, Extent::new(0, 0)), 0);
        assert!(c.is_none());
    }

    #[test]
    fn shrink_saturates_at_zero() {
        let mut c = PixelCrop { bottom: 2, ..PixelCrop::NONE };
        assert_eq!(c.shrink(Edge::Bottom, 5), 2);
        assert_eq!(c.bottom, 0);
        assert_eq!(c.shrink(Edge::Bottom, 1), 0);
    }

    #[test]
    fn reset_clears_every_edge() {
        let mut c = PixelCrop { left: 1, right: 2, top: 3, bottom: 4 };
        c.reset();
        assert!(c.is_none());
        for edge in Edge::ALL {
            assert_eq!(c.get(edge), 0);
        }
    }

    #[test]
    fn remaining_saturates() {
        let c = PixelCrop { left: u32::MAX, right: u32::MAX, top: 0, bottom: 0 };
        assert_eq!(c.remaining(IMAGE), Extent::new(0, 8));
    }
}

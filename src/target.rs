//! Render target binding
//!
//! The driver does not own or allocate a frame buffer. The drawing layer
//! above supplies one, wrapped in a [`RenderTarget`] together with the
//! panel's [`BoundingBox`], and [`Display::init`](crate::Display::init)
//! records the association and clears it. The target also tracks the
//! dirty region touched since the last flush, so a drawing layer can
//! push deltas instead of whole frames.

/// Rectangular pixel region with inclusive extents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    /// Leftmost column
    pub x_min: u8,
    /// Topmost row
    pub y_min: u8,
    /// Rightmost column, inclusive
    pub x_max: u8,
    /// Bottom row, inclusive
    pub y_max: u8,
}

impl BoundingBox {
    /// Create a bounding box from inclusive extents
    pub const fn new(x_min: u8, y_min: u8, x_max: u8, y_max: u8) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// The full extent of a `width` x `height` panel
    pub const fn panel(width: u8, height: u8) -> Self {
        Self::new(0, 0, width - 1, height - 1)
    }

    /// A region containing no pixels
    ///
    /// Positioned so that the first [`extend`](Self::extend) snaps both
    /// extents to the marked pixel.
    pub const fn empty() -> Self {
        Self::new(u8::MAX, u8::MAX, 0, 0)
    }

    /// Whether the region contains no pixels
    pub const fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Grow the region to include the pixel at (`x`, `y`)
    pub fn extend(&mut self, x: u8, y: u8) {
        if x < self.x_min {
            self.x_min = x;
        }
        if x > self.x_max {
            self.x_max = x;
        }
        if y < self.y_min {
            self.y_min = y;
        }
        if y > self.y_max {
            self.y_max = y;
        }
    }

    /// Whether (`x`, `y`) lies inside the region
    pub const fn contains(&self, x: u8, y: u8) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

/// An externally-owned frame buffer bound to the panel
///
/// Borrows the buffer for the binding's lifetime; ownership stays with
/// the caller. `bounds` is the panel extent used for clipping; `dirty`
/// is the region modified since the last [`clean`](Self::clean).
#[derive(Debug)]
pub struct RenderTarget<'b> {
    buffer: &'b mut [u8],
    bounds: BoundingBox,
    dirty: BoundingBox,
}

impl<'b> RenderTarget<'b> {
    /// Bind `buffer` to the panel extent `bounds`
    ///
    /// The whole extent starts dirty: nothing on the panel can be
    /// assumed to match a buffer the driver has never flushed.
    pub fn new(buffer: &'b mut [u8], bounds: BoundingBox) -> Self {
        Self {
            buffer,
            bounds,
            dirty: bounds,
        }
    }

    /// Zero the buffer and mark the full extent dirty
    pub fn clear(&mut self) {
        self.buffer.fill(0);
        self.dirty = self.bounds;
    }

    /// Mark the pixel at (`x`, `y`) as modified
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn mark(&mut self, x: u8, y: u8) {
        if self.bounds.contains(x, y) {
            self.dirty.extend(x, y);
        }
    }

    /// Reset the dirty region after a flush
    pub fn clean(&mut self) {
        self.dirty = BoundingBox::empty();
    }

    /// The buffer contents
    pub fn buffer(&self) -> &[u8] {
        self.buffer
    }

    /// Mutable access to the buffer, for the drawing layer
    ///
    /// Callers are expected to [`mark`](Self::mark) the pixels they touch.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buffer
    }

    /// The panel extent this buffer is bound to
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// The region modified since the last [`clean`](Self::clean)
    pub fn dirty(&self) -> BoundingBox {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_contains_nothing() {
        let bbox = BoundingBox::empty();
        assert!(bbox.is_empty());
        assert!(!bbox.contains(0, 0));
    }

    #[test]
    fn extend_from_empty_snaps_to_the_pixel() {
        let mut bbox = BoundingBox::empty();
        bbox.extend(10, 20);
        assert_eq!(bbox, BoundingBox::new(10, 20, 10, 20));
        assert!(!bbox.is_empty());
    }

    #[test]
    fn extend_grows_in_all_directions() {
        let mut bbox = BoundingBox::new(10, 10, 10, 10);
        bbox.extend(5, 30);
        bbox.extend(20, 2);
        assert_eq!(bbox, BoundingBox::new(5, 2, 20, 30));
    }

    #[test]
    fn new_target_starts_fully_dirty() {
        let mut buffer = [0xFFu8; 16];
        let target = RenderTarget::new(&mut buffer, BoundingBox::panel(16, 8));
        assert_eq!(target.dirty(), target.bounds());
    }

    #[test]
    fn clear_zeroes_buffer_and_dirties_everything() {
        let mut buffer = [0xFFu8; 16];
        let mut target = RenderTarget::new(&mut buffer, BoundingBox::panel(16, 8));
        target.clean();
        target.clear();
        assert!(target.buffer().iter().all(|&byte| byte == 0));
        assert_eq!(target.dirty(), BoundingBox::panel(16, 8));
    }

    #[test]
    fn mark_ignores_out_of_bounds_pixels() {
        let mut buffer = [0u8; 16];
        let mut target = RenderTarget::new(&mut buffer, BoundingBox::panel(16, 8));
        target.clean();
        target.mark(40, 2);
        assert!(target.dirty().is_empty());
        target.mark(3, 4);
        assert_eq!(target.dirty(), BoundingBox::new(3, 4, 3, 4));
    }
}

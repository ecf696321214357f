/// A horizontally scrollable container inside a chapter.
///
/// Offsets and extents share one unit (pixels in a browser, cells in a
/// terminal). The extent is the largest reachable offset.
pub trait ScrollRegion {
    fn offset(&self) -> f64;

    fn extent(&self) -> f64;

    /// Moves to `offset`, clamped to `[0, extent]`.
    fn set_offset(&mut self, offset: f64);

    fn can_scroll_right(&self, epsilon: f64) -> bool {
        self.offset() < self.extent() - epsilon
    }

    fn can_scroll_left(&self, epsilon: f64) -> bool {
        self.offset() > epsilon
    }

    /// Applies `delta` and returns the resulting offset.
    fn scroll_by(&mut self, delta: f64) -> f64 {
        self.set_offset(self.offset() + delta);
        self.offset()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentRegion {
    content_width: f64,
    viewport_width: f64,
    offset: f64,
}

impl ContentRegion {
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        Self {
            content_width: content_width.max(0.0),
            viewport_width: viewport_width.max(0.0),
            offset: 0.0,
        }
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn resize(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width.max(0.0);
        self.offset = self.offset.clamp(0.0, self.extent());
    }
}

impl ScrollRegion for ContentRegion {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn extent(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = if offset.is_finite() {
            offset.clamp(0.0, self.extent())
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_is_zero_when_content_fits() {
        let region = ContentRegion::new(80.0, 120.0);
        assert_eq!(region.extent(), 0.0);
        assert!(!region.can_scroll_right(0.5));
        assert!(!region.can_scroll_left(0.5));
    }

    #[test]
    fn resize_reclamps_offset() {
        let mut region = ContentRegion::new(400.0, 100.0);
        region.set_offset(300.0);
        region.resize(250.0);
        assert_eq!(region.offset(), 150.0);
    }

    #[test]
    fn non_finite_offset_resets() {
        let mut region = ContentRegion::new(400.0, 100.0);
        region.set_offset(120.0);
        region.set_offset(f64::NAN);
        assert_eq!(region.offset(), 0.0);
    }
}

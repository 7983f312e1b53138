//! Core geometric types
//!
//! All coordinates are client-area pixels as reported by the window.

/// Rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the right edge coordinate
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Returns the bottom edge coordinate
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Grows the rectangle to at least `min_w` x `min_h`, keeping the
    /// top-left corner where it is. Never shrinks.
    pub fn with_min_size(&self, min_w: i32, min_h: i32) -> Rect {
        Rect::new(self.x, self.y, self.w.max(min_w), self.h.max(min_h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10, 20, 100, 50);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
    }

    #[test]
    fn min_size_only_grows() {
        let rect = Rect::new(100, 100, 50, 300);
        assert_eq!(rect.with_min_size(80, 80), Rect::new(100, 100, 80, 300));
        assert_eq!(rect.with_min_size(10, 10), rect);
    }
}

//! Axis-aligned rectangles in integer pixel space
//!
//! Rectangles are half-open: a rect covers `[min, min + size)` on each axis.
//! Two rects overlap only if their intersection has non-zero area, so rects
//! that merely share an edge do not collide.

use glam::IVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            min: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn from_pos(pos: IVec2, w: i32, h: i32) -> Self {
        Self {
            min: pos,
            size: IVec2::new(w, h),
        }
    }

    /// A `w` x `h` rect centered on `center` (rounded toward the top-left)
    pub fn centered(center: IVec2, w: i32, h: i32) -> Self {
        Self::new(center.x - w / 2, center.y - h / 2, w, h)
    }

    #[inline]
    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        self.min + self.size / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Non-empty intersection test
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_interior() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
        assert!(!a.overlaps(&Rect::new(10, 10, 1, 1)));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(5, 5, 0, 4)));
    }

    #[test]
    fn test_centered_window() {
        let r = Rect::centered(IVec2::new(10, 20), 2, 2);
        assert_eq!(r.min, IVec2::new(9, 19));
        assert_eq!(r.max(), IVec2::new(11, 21));
        assert_eq!(r.center(), IVec2::new(10, 20));
    }
}

//! Axis-aligned integer rectangles (hitboxes, clamp boxes, despawn bounds)

use serde::{Deserialize, Serialize};

use crate::Point;

/// Width and height in screen units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    #[inline]
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }
}

/// Rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Strict overlap test; touching edges do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        other.x < self.right()
            && self.x < other.right()
            && other.y < self.bottom()
            && self.y < other.bottom()
    }

    /// Grow by `margin` on every side, saturating at the `i32` limits
    pub fn inflate(&self, margin: i32) -> Self {
        let grow = margin.saturating_mul(2);
        Self::new(
            self.x.saturating_sub(margin),
            self.y.saturating_sub(margin),
            self.width.saturating_add(grow),
            self.height.saturating_add(grow),
        )
    }

    /// Clamp the top-left corner of a `size` box so it stays inside `self`
    ///
    /// Axes are clamped independently.
    pub fn clamp_origin(&self, p: Point, size: Size) -> Point {
        let max_x = self.right() - size.width;
        let max_y = self.bottom() - size.height;
        Point::new(p.x.max(self.x).min(max_x), p.y.max(self.y).min(max_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        assert!(a.intersects(&Rect::new(2, 2, 2, 2)));
        // Touching edges only
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
        assert!(!a.intersects(&Rect::new(-20, -20, 5, 5)));
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(9, 9)));
        assert!(!r.contains(Point::new(10, 5)));
        assert!(!r.contains(Point::new(5, -1)));
    }

    #[test]
    fn test_inflate() {
        let r = Rect::new(0, 0, 1280, 720).inflate(500);
        assert_eq!(r, Rect::new(-500, -500, 2280, 1720));

        let huge = Rect::new(0, 0, 1280, 720).inflate(2_000_000_000);
        assert_eq!(huge.x, -2_000_000_000);
        assert_eq!(huge.width, i32::MAX);
        assert_eq!(huge.height, i32::MAX);
    }

    #[test]
    fn test_clamp_origin() {
        let bounds = Rect::new(0, 0, 200, 200);
        let hitbox = Size::square(50);
        assert_eq!(bounds.clamp_origin(Point::new(-5, 20), hitbox), Point::new(0, 20));
        assert_eq!(bounds.clamp_origin(Point::new(180, 400), hitbox), Point::new(150, 150));
        assert_eq!(bounds.clamp_origin(Point::new(70, 70), hitbox), Point::new(70, 70));
    }

    #[test]
    fn test_center() {
        assert_eq!(Rect::new(50, 50, 590, 620).center(), Point::new(345, 360));
    }
}

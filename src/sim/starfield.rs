//! Parallax starfield behind the action
//!
//! Three layers scroll left at different speeds. Farther layers hold more,
//! smaller and slower stars. A star that leaves the left edge re-enters at
//! the right edge at a fresh height.

use rand::Rng;

use super::rect::Size;
use crate::Point;

/// (count multiplier, speed multiplier, size) per layer, nearest first
const LAYERS: [(usize, i32, i32); 3] = [(1, 3, 5), (2, 2, 3), (3, 1, 2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub position: Point,
    /// Diameter of the dot
    pub size: i32,
    /// Leftward pixels per tick
    pub speed: i32,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    pub stars: Vec<Star>,
    resolution: Size,
}

impl Starfield {
    /// Scatter `count`, `2 * count` and `3 * count` stars over the screen
    pub fn new<R: Rng>(resolution: Size, count: usize, base_speed: i32, rng: &mut R) -> Self {
        let mut stars = Vec::with_capacity(count.saturating_mul(6));
        for (multiplier, speed, size) in LAYERS {
            for _ in 0..count.saturating_mul(multiplier) {
                let position = Point::new(
                    rng.random_range(0..resolution.width.max(1)),
                    rng.random_range(0..resolution.height.max(1)),
                );
                stars.push(Star {
                    position,
                    size,
                    speed: speed.saturating_mul(base_speed),
                });
            }
        }
        Self { stars, resolution }
    }

    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        for star in &mut self.stars {
            star.position.x -= star.speed;
            if star.position.x < 0 {
                star.position = Point::new(
                    self.resolution.width,
                    rng.random_range(0..self.resolution.height.max(1)),
                );
            }
        }
    }
}

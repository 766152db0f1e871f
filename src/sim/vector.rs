//! Real-valued 2D displacement applied to integer screen points

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Point;

/// Vector math failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("cannot normalize a zero-length vector")]
    DivideByZero,
}

/// A displacement (dx, dy)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector(DVec2);

impl Vector {
    pub const ZERO: Self = Self(DVec2::ZERO);

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self(DVec2::new(dx, dy))
    }

    /// Displacement that carries `from` onto `to`
    pub fn between(from: Point, to: Point) -> Self {
        Self::new((to.x - from.x) as f64, (to.y - from.y) as f64)
    }

    /// Build from an angle measured from the vertical axis
    ///
    /// Yields `(sin(angle), cos(angle)) * magnitude`. Particle bursts rely on
    /// this orientation.
    pub fn from_polar(angle: f64, magnitude: f64) -> Self {
        Self::new(angle.sin() * magnitude, angle.cos() * magnitude)
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.0.y
    }

    /// Euclidean length
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.0.length()
    }

    /// Unit vector in the same direction
    pub fn normalize(self) -> Result<Self, VectorError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(VectorError::DivideByZero);
        }
        Ok(Self(self.0 / magnitude))
    }

    pub fn scale(self, k: f64) -> Self {
        Self(self.0 * k)
    }

    /// Translate `point`, truncating each axis toward zero
    pub fn offset(self, point: Point) -> Point {
        Point::new(
            (point.x as f64 + self.0.x) as i32,
            (point.y as f64 + self.0.y) as i32,
        )
    }
}

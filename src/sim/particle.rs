//! Visual-only debris
//!
//! Particles have no lives, never collide and award nothing. They drift
//! under their own control until they leave the despawn bounds.

use rand::Rng;

use super::control::{Control, ControlContext, ControlElement};
use super::rect::Size;
use super::vector::Vector;
use crate::Point;
use crate::color::Color;
use crate::consts::PARTICLE_SPEED;

/// A square fleck of debris
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Point,
    /// Side length of the square
    pub size: i32,
    pub control: Control,
    pub color: Color,
}

impl Particle {
    pub fn new(position: Point, size: i32, control: Control, color: Color) -> Self {
        Self {
            position,
            size,
            control,
            color,
        }
    }

    pub fn update(&mut self) {
        self.position = self
            .control
            .next_position(self.position, &ControlContext::detached());
    }
}

/// How an entity breaks apart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstSpec {
    /// Hitbox area is divided by this to get the matter budget
    pub matter_divisor: f64,
    /// Smallest particle side (inclusive)
    pub min_size: i32,
    /// Largest particle side (exclusive)
    pub max_size: i32,
}

impl BurstSpec {
    /// Matter budget for a hitbox
    pub fn matter(&self, hitbox: Size) -> f64 {
        hitbox.area() as f64 / self.matter_divisor
    }
}

/// Shatter a hitbox into particles flying out of `origin`
///
/// Particles are drawn until their combined area (side squared) uses up the
/// matter budget, so any hitbox with positive area yields at least one.
/// Every particle consumes the same three random draws, which keeps the
/// count comparable between size ranges under a fixed seed.
pub fn burst<R: Rng>(
    origin: Point,
    hitbox: Size,
    color: Color,
    spec: BurstSpec,
    rng: &mut R,
) -> Vec<Particle> {
    let mut matter = spec.matter(hitbox);
    let mut particles = Vec::new();
    let size_span = (spec.max_size - spec.min_size).max(0) as f64;

    while matter > 0.0 {
        let angle = rng.random::<f64>() * std::f64::consts::TAU;
        let size = (spec.min_size + (rng.random::<f64>() * size_span) as i32).max(1);
        let speed = PARTICLE_SPEED * (0.7 * rng.random::<f64>() + 0.3);

        let drift = Vector::from_polar(angle, speed);
        let control = Control::single(ControlElement::constant_displacement(drift));
        particles.push(Particle::new(origin, size, control, color));

        matter -= (size * size) as f64;
    }

    particles
}

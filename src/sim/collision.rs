//! Collision detection and resolution
//!
//! Detection runs once over the positions left by the update phase and only
//! marks who was hit. Resolution then takes at most one life from every
//! marked entity, however many pairs it appeared in.

use super::object::{Collider, GameObject};
use super::player::Player;
use super::world::World;

/// Who was hit this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub player_hit: bool,
    /// Parallel to the object list the report was built from
    pub hit: Vec<bool>,
}

impl CollisionReport {
    pub fn any(&self) -> bool {
        self.player_hit || self.hit.iter().any(|&h| h)
    }
}

/// Both sides must agree that the pair collides
fn collides(a: &dyn Collider, b: &dyn Collider) -> bool {
    a.detect_collision(b) && b.detect_collision(a)
}

/// Test the player against every object, then every object pair `i < j`
///
/// A destroyed player no longer takes part.
pub fn detect(player: &Player, objects: &[GameObject]) -> CollisionReport {
    let mut report = CollisionReport {
        player_hit: false,
        hit: vec![false; objects.len()],
    };

    if !player.is_destroyed() {
        for (i, object) in objects.iter().enumerate() {
            if collides(player, object) {
                report.player_hit = true;
                report.hit[i] = true;
            }
        }
    }

    for i in 0..objects.len() {
        for j in (i + 1)..objects.len() {
            if collides(&objects[i], &objects[j]) {
                report.hit[i] = true;
                report.hit[j] = true;
            }
        }
    }

    report
}

/// Apply a report to the world it was detected in
///
/// Destroyed objects pay out their score and become particles. Survivors
/// keep their relative order.
pub fn resolve(world: &mut World, report: &CollisionReport) {
    if report.player_hit {
        world.player.lives -= 1;
        log::debug!("Player hit, {} lives left", world.player.lives);
    }
    let debris = world.player.destroy(&mut world.rng);
    if !debris.is_empty() {
        log::debug!("Player destroyed");
        world.particles.extend(debris);
    }

    let objects = std::mem::take(&mut world.objects);
    for (mut object, &hit) in objects.into_iter().zip(&report.hit) {
        if hit {
            object.lives -= 1;
        }
        if object.is_destroyed() {
            log::debug!("Destroyed {:?} #{}, +{}", object.kind, object.id, object.score);
            world.total_score += object.score;
            let debris = object.destroy(&mut world.rng);
            world.particles.extend(debris);
        } else {
            world.objects.push(object);
        }
    }
}

/// Detect and resolve in one go
pub fn run(world: &mut World) -> CollisionReport {
    let report = detect(&world.player, &world.objects);
    resolve(world, &report);
    report
}

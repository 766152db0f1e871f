//! Per-tick phases shared by the scenes
//!
//! Each scene composes its update from these in a fixed order. Endless mode
//! runs all of them:
//! fire → player → objects → ambient → actions → collisions → cleanup.

use super::collision::{self, CollisionReport};
use super::world::World;

/// Spawn the player's shot if one was requested since the last tick
pub fn fire(world: &mut World) {
    if let Some(projectile) = world.player.take_fire_request() {
        world.spawn(projectile);
    }
}

/// Move the player against the positions at the start of the phase
pub fn update_player(world: &mut World) {
    let snapshot = world.positions();
    world.player.update(&snapshot);
}

/// Move every object; followers see where their targets are after the player moved
pub fn update_objects(world: &mut World) {
    let snapshot = world.positions();
    for object in &mut world.objects {
        object.update(&snapshot);
    }
}

/// Particles and the starfield
pub fn update_ambient(world: &mut World) {
    for particle in &mut world.particles {
        particle.update();
    }
    world.starfield.update(&mut world.rng);
}

/// Let every object act, then append what they spawned
///
/// Spawns from this pass are not visible to the objects acting in it.
pub fn perform_actions(world: &mut World) {
    let target = world.player.position;
    let mut spawned = Vec::new();
    for object in &mut world.objects {
        if let Some(new_object) = object.action(target, &mut world.rng) {
            spawned.push(new_object);
        }
    }
    for object in spawned {
        world.spawn(object);
    }
}

pub fn collide(world: &mut World) -> CollisionReport {
    collision::run(world)
}

/// Drop objects and particles that left the despawn bounds
pub fn clean_up(world: &mut World) {
    let bounds = world.despawn_bounds;
    let before = world.objects.len() + world.particles.len();
    world.objects.retain(|o| bounds.contains(o.position));
    world.particles.retain(|p| bounds.contains(p.position));
    let dropped = before - world.objects.len() - world.particles.len();
    if dropped > 0 {
        log::trace!("Despawned {} entities", dropped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use crate::color::palette;
    use crate::input::Key;
    use crate::settings::Settings;
    use crate::sim::control::{Control, ControlElement};
    use crate::sim::object::{GameObject, ObjectKind};
    use crate::sim::particle::Particle;
    use crate::sim::vector::Vector;

    fn world() -> World {
        World::new(&Settings::default())
    }

    #[test]
    fn test_fire_spawns_once() {
        let mut world = world();
        world.player.position = Point::new(100, 100);
        world.player.request_fire();
        fire(&mut world);
        fire(&mut world);
        assert_eq!(world.objects.len(), 1);
        assert_eq!(world.objects[0].kind, ObjectKind::PlayerProjectile);
        assert_eq!(world.objects[0].position, Point::new(150, 125));
    }

    #[test]
    fn test_follower_tracks_moved_player() {
        let mut world = world();
        world.player.position = Point::new(100, 100);
        world.player.control = Control::single(ControlElement::player_driven());
        world.player.steer(Key::Down, false);
        let target = world.player.id;
        let follower = GameObject::enemy(Point::new(100, 400), 0.0)
            .with_control(Control::single(ControlElement::follow(target, 5)));
        world.spawn(follower);

        update_player(&mut world);
        assert_eq!(world.player.position, Point::new(100, 105));
        update_objects(&mut world);
        assert_eq!(world.objects[0].position, Point::new(100, 395));
    }

    #[test]
    fn test_actions_spawn_after_pass() {
        let mut world = world();
        world.player.position = Point::new(100, 300);
        let mut enemy = GameObject::enemy(Point::new(800, 300), 1.0);
        if let ObjectKind::Enemy(state) = &mut enemy.kind {
            state.fire_cooldown = 0;
        }
        world.spawn(enemy);

        perform_actions(&mut world);
        assert_eq!(world.objects.len(), 2);
        assert_eq!(world.objects[1].kind, ObjectKind::EnemyProjectile);
        assert_ne!(world.objects[1].id, world.objects[0].id);
    }

    #[test]
    fn test_particle_removed_once_out_of_bounds() {
        let mut world = world();
        let drift = Control::single(ControlElement::constant_displacement(Vector::new(-100.0, 0.0)));
        world
            .particles
            .push(Particle::new(Point::new(0, 300), 4, drift, palette::WHITE));

        // -500 is the left despawn edge and still inside
        for _ in 0..5 {
            update_ambient(&mut world);
            clean_up(&mut world);
            assert_eq!(world.particles.len(), 1);
        }
        assert_eq!(world.particles[0].position, Point::new(-500, 300));

        update_ambient(&mut world);
        clean_up(&mut world);
        assert!(world.particles.is_empty());

        update_ambient(&mut world);
        clean_up(&mut world);
        assert!(world.particles.is_empty());
    }

    #[test]
    fn test_objects_despawn_silently() {
        let mut world = world();
        world.spawn(GameObject::player_projectile(Point::new(1780, 300)));
        clean_up(&mut world);
        assert!(world.objects.is_empty());
        assert_eq!(world.total_score, 0);
        assert!(world.particles.is_empty());
    }
}

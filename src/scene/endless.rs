//! Endless mode: enemies keep coming until the player is out of lives
//!
//! Enemies spawn at the right edge, fly to the middle of the screen and then
//! chase the player. Every 1000 points make them shoot more often, arrive
//! faster and spawn sooner, up to fixed limits.

use rand::Rng;

use crate::Point;
use crate::consts::*;
use crate::input::{Key, KeyEvent};
use crate::renderer::{Canvas, overlay, shapes};
use crate::sim::{Control, ControlElement, GameObject, World, tick};

/// Points per difficulty step
const SCORE_STEP: u64 = 1000;
const MAX_PROJECTILE_PROBABILITY: f64 = 0.9;
const MAX_SPAWN_PROBABILITY: f64 = 0.5;
const BASE_SPAWN_COOLDOWN: u32 = 100;
const MIN_SPAWN_COOLDOWN: u32 = 50;
const BASE_ENEMY_SPEED: u32 = 3;
const MAX_ENEMY_SPEED: u32 = 12;

/// Enemy tuning derived from the running score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Fire probability handed to newly spawned enemies
    pub projectile_probability: f64,
    /// Chance per eligible tick that an enemy spawns
    pub spawn_probability: f64,
    /// Ticks between a spawn and the next roll
    pub spawn_cooldown: u32,
    /// Approach speed of newly spawned enemies
    pub enemy_speed: u32,
}

impl Difficulty {
    pub fn for_score(score: u64) -> Self {
        let factor = score / SCORE_STEP;
        let f = factor as f64;
        let steps = u32::try_from(factor).unwrap_or(u32::MAX);

        Self {
            projectile_probability: (ENEMY_FIRE_PROBABILITY + 0.1 * f).min(MAX_PROJECTILE_PROBABILITY),
            spawn_probability: (0.3 + 0.05 * f).min(MAX_SPAWN_PROBABILITY),
            spawn_cooldown: BASE_SPAWN_COOLDOWN
                .saturating_sub(steps.saturating_mul(7))
                .max(MIN_SPAWN_COOLDOWN),
            enemy_speed: BASE_ENEMY_SPEED.saturating_add(steps).min(MAX_ENEMY_SPEED),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EndlessMode {
    pub running: bool,
    pub difficulty: Difficulty,
    /// Ticks until the spawner rolls again
    pub spawn_cooldown: u32,
}

impl EndlessMode {
    /// Hand the ship over to the keyboard
    pub fn enter(world: &mut World) -> Self {
        world.player.control = Control::single(ControlElement::player_driven());
        Self {
            running: true,
            difficulty: Difficulty::for_score(world.total_score),
            spawn_cooldown: 0,
        }
    }

    pub fn update(&mut self, world: &mut World) {
        tick::fire(world);
        tick::update_player(world);
        tick::update_objects(world);
        tick::update_ambient(world);
        tick::perform_actions(world);
        tick::collide(world);

        self.difficulty = Difficulty::for_score(world.total_score);
        self.spawn_enemies(world);

        if world.player.is_destroyed() {
            self.running = false;
        }
        tick::clean_up(world);

        log::trace!(
            "objects={} particles={} score={}",
            world.objects.len(),
            world.particles.len(),
            world.total_score
        );
    }

    /// Roll for an enemy when the cooldown is spent
    ///
    /// The cooldown only resets after a successful spawn, so a failed roll
    /// is retried on the next tick.
    fn spawn_enemies(&mut self, world: &mut World) {
        if self.spawn_cooldown > 0 {
            self.spawn_cooldown -= 1;
            return;
        }
        if world.rng.random::<f64>() < self.difficulty.spawn_probability {
            self.spawn_enemy(world);
            self.spawn_cooldown = self.difficulty.spawn_cooldown;
        }
    }

    fn spawn_enemy(&self, world: &mut World) {
        let res = world.resolution;
        let y = world
            .rng
            .random_range(ENEMY_SPAWN_MARGIN..(res.height - ENEMY_SPAWN_MARGIN).max(ENEMY_SPAWN_MARGIN + 1));
        let start = Point::new(res.width, y);
        let destination = Point::new(res.width / 2, y);

        let control = Control::new([
            ControlElement::linear_transition(destination, self.difficulty.enemy_speed),
            ControlElement::follow(world.player.id, ENEMY_FOLLOW_SPEED),
        ]);
        let enemy = GameObject::enemy(start, self.difficulty.projectile_probability).with_control(control);
        world.spawn(enemy);
    }

    /// Movement keys steer, the fire key requests a shot
    pub fn handle_key(&mut self, world: &mut World, event: KeyEvent) {
        match event.key {
            Key::Up | Key::Down | Key::Left | Key::Right => {
                world.player.steer(event.key, event.release)
            }
            Key::Fire if !event.release => world.player.request_fire(),
            Key::Fire | Key::Confirm => {}
        }
    }

    pub fn render(&self, world: &World, canvas: &mut dyn Canvas) {
        shapes::draw_world(canvas, world);
        overlay::draw(canvas, world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Motion, ObjectKind};
    use proptest::prelude::*;

    fn endless() -> (World, EndlessMode) {
        let mut world = World::new(&Settings::default());
        world.player.position = world.fly_in_destination();
        let scene = EndlessMode::enter(&mut world);
        (world, scene)
    }

    #[test]
    fn test_difficulty_curve() {
        let start = Difficulty::for_score(0);
        assert_eq!(start.projectile_probability, 0.3);
        assert_eq!(start.spawn_probability, 0.3);
        assert_eq!(start.spawn_cooldown, 100);
        assert_eq!(start.enemy_speed, 3);

        let d = Difficulty::for_score(2999);
        assert!((d.projectile_probability - 0.5).abs() < 1e-9);
        assert!((d.spawn_probability - 0.4).abs() < 1e-9);
        assert_eq!(d.spawn_cooldown, 86);
        assert_eq!(d.enemy_speed, 5);

        let capped = Difficulty::for_score(1_000_000);
        assert_eq!(capped.projectile_probability, 0.9);
        assert_eq!(capped.spawn_probability, 0.5);
        assert_eq!(capped.spawn_cooldown, 50);
        assert_eq!(capped.enemy_speed, 12);
    }

    #[test]
    fn test_player_killed_ends_scene_same_tick() {
        let (mut world, mut scene) = endless();
        world.player.lives = 1;
        let at = world.player.position;
        world.spawn(GameObject::enemy(Point::new(at.x + 10, at.y + 10), 0.0));

        scene.update(&mut world);
        assert_eq!(world.player.lives, 0);
        assert!(!scene.running);
        assert_eq!(world.total_score, 100);
    }

    #[test]
    fn test_spawned_enemy_approaches_then_follows() {
        let (mut world, mut scene) = endless();
        scene.difficulty.spawn_probability = 1.0;
        scene.spawn_enemies(&mut world);
        assert_eq!(scene.spawn_cooldown, 100);

        let enemy = &world.objects[0];
        assert!(matches!(enemy.kind, ObjectKind::Enemy(_)));
        assert_eq!(enemy.position.x, 1280);
        assert!((100..620).contains(&enemy.position.y));
        assert_eq!(enemy.control.pending(), 1);
        let active = enemy.control.active().map(|e| e.motion());
        assert_eq!(
            active,
            Some(Motion::LinearTransition {
                destination: Point::new(640, enemy.position.y),
                speed: 3
            })
        );
    }

    #[test]
    fn test_failed_roll_keeps_cooldown_at_zero() {
        let (mut world, mut scene) = endless();
        scene.difficulty.spawn_probability = 0.0;
        for _ in 0..10 {
            scene.spawn_enemies(&mut world);
        }
        assert_eq!(scene.spawn_cooldown, 0);
        assert!(world.objects.is_empty());
    }

    #[test]
    fn test_keys_drive_player() {
        let (mut world, mut scene) = endless();
        let start = world.player.position;
        scene.handle_key(&mut world, KeyEvent::press(Key::Up));
        scene.handle_key(&mut world, KeyEvent::press(Key::Fire));
        scene.update(&mut world);

        assert_eq!(world.player.position, Point::new(start.x, start.y - 5));
        let shots = world
            .objects
            .iter()
            .filter(|o| o.kind == ObjectKind::PlayerProjectile)
            .count();
        assert_eq!(shots, 1);
    }

    proptest! {
        #[test]
        fn prop_difficulty_is_monotonic(a in 0u64..100_000, b in 0u64..100_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let easy = Difficulty::for_score(lo);
            let hard = Difficulty::for_score(hi);
            prop_assert!(hard.projectile_probability >= easy.projectile_probability);
            prop_assert!(hard.spawn_probability >= easy.spawn_probability);
            prop_assert!(hard.spawn_cooldown <= easy.spawn_cooldown);
            prop_assert!(hard.enemy_speed >= easy.enemy_speed);
            prop_assert!(hard.projectile_probability <= 0.9);
            prop_assert!(hard.spawn_cooldown >= 50);
        }
    }
}

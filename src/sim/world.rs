//! The shared arena of one game session
//!
//! World owns every entity, the running score and the session RNG. Scenes
//! receive it as `&mut World` for the length of one update and as `&World`
//! while rendering.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::control::PositionSnapshot;
use super::object::GameObject;
use super::particle::Particle;
use super::player::Player;
use super::rect::{Rect, Size};
use super::starfield::Starfield;
use super::EntityId;
use crate::Point;
use crate::consts::*;
use crate::settings::Settings;

pub struct World {
    /// Visible area, fixed for the session
    pub resolution: Size,
    /// Visible area inflated by the despawn margin
    pub despawn_bounds: Rect,
    pub player: Player,
    /// Enemies and projectiles, in insertion order
    pub objects: Vec<GameObject>,
    pub particles: Vec<Particle>,
    pub total_score: u64,
    pub starfield: Starfield,
    pub rng: Pcg32,
    pub seed: u64,
    player_lives: i32,
    next_id: EntityId,
}

impl World {
    /// Build a session from settings that passed [`Settings::validate`]
    pub fn new(settings: &Settings) -> Self {
        let resolution = settings.resolution();
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let starfield = Starfield::new(resolution, settings.star_count, settings.star_speed, &mut rng);

        let mut world = Self {
            resolution,
            despawn_bounds: Rect::at(Point::ZERO, resolution).inflate(settings.despawn_margin),
            player: Player::new(0, Point::ZERO, Rect::default(), settings.player_lives),
            objects: Vec::new(),
            particles: Vec::new(),
            total_score: 0,
            starfield,
            rng,
            seed: settings.seed,
            player_lives: settings.player_lives,
            next_id: 1,
        };
        world.player = world.fresh_player();
        world
    }

    /// Start a new run: fresh player, no objects or particles, zero score
    ///
    /// Resolution, despawn bounds, the starfield and the RNG stream carry
    /// over.
    pub fn reset(&mut self) {
        self.objects.clear();
        self.particles.clear();
        self.total_score = 0;
        self.player = self.fresh_player();
        log::debug!("World reset, player is entity {}", self.player.id);
    }

    fn fresh_player(&mut self) -> Player {
        let id = self.next_entity_id();
        Player::new(id, self.player_start(), self.player_bounding_box(), self.player_lives)
    }

    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert an object, assigning it a fresh id
    pub fn spawn(&mut self, mut object: GameObject) -> EntityId {
        object.id = self.next_entity_id();
        log::debug!("Spawned {:?} #{} at {}", object.kind, object.id, object.position);
        let id = object.id;
        self.objects.push(object);
        id
    }

    /// Left half of the screen, inset from the edges
    pub fn player_bounding_box(&self) -> Rect {
        Rect::new(
            PLAYER_BOX_INSET,
            PLAYER_BOX_INSET,
            self.resolution.width / 2 - PLAYER_BOX_INSET,
            self.resolution.height - 2 * PLAYER_BOX_INSET,
        )
    }

    /// Just off the left edge, vertically centered
    pub fn player_start(&self) -> Point {
        Point::new(-PLAYER_SIZE, (self.resolution.height - PLAYER_SIZE) / 2)
    }

    /// Where the fly-in parks the player: centered in its bounding box
    pub fn fly_in_destination(&self) -> Point {
        let center = self.player_bounding_box().center();
        Point::new(center.x - PLAYER_SIZE / 2, center.y - PLAYER_SIZE / 2)
    }

    /// Positions of the player and every object right now
    pub fn positions(&self) -> PositionSnapshot {
        std::iter::once((self.player.id, self.player.position))
            .chain(self.objects.iter().map(|o| (o.id, o.position)))
            .collect()
    }
}

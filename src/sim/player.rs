//! The player's ship

use rand::Rng;

use super::control::{Control, ControlContext, PositionLookup, Steering};
use super::object::{Collider, Faction, GameObject};
use super::particle::Particle;
use super::rect::{Rect, Size};
use super::EntityId;
use crate::Point;
use crate::color::{Color, palette};
use crate::consts::*;
use crate::input::Key;

/// The singleton player entity
#[derive(Debug, Clone)]
pub struct Player {
    pub id: EntityId,
    /// Top-left corner of the hitbox
    pub position: Point,
    pub hitbox: Size,
    /// Player-driven movement is clamped to this box
    pub bounding_box: Rect,
    pub control: Control,
    pub color: Color,
    pub lives: i32,
    /// Horizontal signal in {-1, 0, 1}
    pub horizontal: i32,
    /// Vertical signal in {-1, 0, 1}; positive is down
    pub vertical: i32,
    /// Ticks until the next shot is allowed
    pub projectile_cooldown: u32,
    fire_requested: bool,
    wrecked: bool,
}

impl Player {
    pub fn new(id: EntityId, position: Point, bounding_box: Rect, lives: i32) -> Self {
        Self {
            id,
            position,
            hitbox: Size::square(PLAYER_SIZE),
            bounding_box,
            control: Control::default(),
            color: palette::PLAYER,
            lives,
            horizontal: 0,
            vertical: 0,
            projectile_cooldown: 0,
            fire_requested: false,
            wrecked: false,
        }
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.lives <= 0
    }

    /// Center of the hitbox
    pub fn center(&self) -> Point {
        Rect::at(self.position, self.hitbox).center()
    }

    /// Apply a movement key transition to the directional signal
    ///
    /// Each axis only changes when the result stays within [-1, 1], so
    /// unmatched presses and releases cannot push the signal past one.
    pub fn steer(&mut self, key: Key, release: bool) {
        let (dh, dv) = key.direction();
        let sign = if release { -1 } else { 1 };

        let horizontal = self.horizontal + sign * dh;
        if horizontal.abs() <= 1 {
            self.horizontal = horizontal;
        }
        let vertical = self.vertical + sign * dv;
        if vertical.abs() <= 1 {
            self.vertical = vertical;
        }
    }

    /// Ask for a shot on the next update
    pub fn request_fire(&mut self) {
        self.fire_requested = true;
    }

    /// Consume a pending fire request
    pub fn take_fire_request(&mut self) -> Option<GameObject> {
        if !std::mem::take(&mut self.fire_requested) {
            return None;
        }
        self.spawn_projectile()
    }

    /// Fire from the nose of the ship if the cooldown allows
    pub fn spawn_projectile(&mut self) -> Option<GameObject> {
        if self.projectile_cooldown != 0 || self.is_destroyed() {
            return None;
        }
        let center = self.center();
        let nose = Point::new(center.x + self.hitbox.width / 2, center.y);
        self.projectile_cooldown = PLAYER_PROJECTILE_COOLDOWN;
        Some(GameObject::player_projectile(nose))
    }

    pub fn steering(&self) -> Steering {
        Steering {
            horizontal: self.horizontal,
            vertical: self.vertical,
            speed: PLAYER_SPEED,
            bounding_box: self.bounding_box,
            hitbox: self.hitbox,
        }
    }

    /// Tick the cooldown and move, unless the ship is destroyed
    pub fn update(&mut self, lookup: &dyn PositionLookup) {
        self.projectile_cooldown = self.projectile_cooldown.saturating_sub(1);

        if self.is_destroyed() {
            return;
        }
        let ctx = ControlContext {
            lookup,
            steering: Some(self.steering()),
        };
        self.position = self.control.next_position(self.position, &ctx);
    }

    /// Burst into debris the first time the ship is found destroyed
    pub fn destroy<R: Rng>(&mut self, rng: &mut R) -> Vec<Particle> {
        if self.wrecked || !self.is_destroyed() {
            return Vec::new();
        }
        self.wrecked = true;
        super::particle::burst(
            self.position,
            self.hitbox,
            self.color,
            Faction::Player.burst_spec(),
            rng,
        )
    }
}

impl Collider for Player {
    fn faction(&self) -> Faction {
        Faction::Player
    }

    fn hit_rect(&self) -> Rect {
        Rect::at(self.position, self.hitbox)
    }
}

//! Non-player game objects: enemies and projectiles
//!
//! The variant set is closed. Per-variant behavior (action, collision veto,
//! destruction) dispatches on [`ObjectKind`] and [`Faction`] instead of
//! runtime type checks.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::control::{Control, ControlContext, ControlElement, PositionLookup};
use super::particle::{BurstSpec, Particle, burst};
use super::rect::{Rect, Size};
use super::vector::{Vector, VectorError};
use super::EntityId;
use crate::Point;
use crate::color::{Color, palette};
use crate::consts::*;

/// Which side an entity fights for; drives the collision exemption table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    PlayerProjectile,
    Enemy,
    EnemyProjectile,
}

impl Faction {
    /// Pairs that pass through each other
    ///
    /// Ships ignore their own side's projectiles and vice versa. Everything
    /// else collides, including enemy against enemy.
    pub fn ignores(self, other: Faction) -> bool {
        use Faction::*;
        matches!(
            (self, other),
            (Player, PlayerProjectile)
                | (PlayerProjectile, Player)
                | (Enemy, EnemyProjectile)
                | (EnemyProjectile, Enemy)
        )
    }

    /// How entities of this faction shatter
    pub fn burst_spec(self) -> BurstSpec {
        match self {
            Faction::Enemy => BurstSpec {
                matter_divisor: ENEMY_MATTER_DIVISOR,
                min_size: PARTICLE_MIN_SIZE,
                max_size: PARTICLE_MAX_SIZE,
            },
            Faction::Player => BurstSpec {
                matter_divisor: 1.0,
                min_size: PARTICLE_MIN_SIZE,
                max_size: PARTICLE_MAX_SIZE,
            },
            Faction::PlayerProjectile | Faction::EnemyProjectile => BurstSpec {
                matter_divisor: 1.0,
                min_size: PROJECTILE_PARTICLE_MIN_SIZE,
                max_size: PROJECTILE_PARTICLE_MAX_SIZE,
            },
        }
    }
}

/// Anything that takes part in the collision pass
pub trait Collider {
    fn faction(&self) -> Faction;
    fn hit_rect(&self) -> Rect;

    /// Rectangle overlap, vetoed by the faction exemption table
    fn detect_collision(&self, other: &dyn Collider) -> bool {
        !self.faction().ignores(other.faction()) && self.hit_rect().intersects(&other.hit_rect())
    }
}

/// Enemy-specific state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyState {
    /// Ticks until the next shot may be attempted
    pub fire_cooldown: u32,
    /// Chance of firing on a tick with the cooldown at zero
    pub fire_probability: f64,
}

/// Variant tag plus variant-specific state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectKind {
    Enemy(EnemyState),
    PlayerProjectile,
    EnemyProjectile,
}

/// An enemy or projectile living in the world
#[derive(Debug, Clone)]
pub struct GameObject {
    /// Assigned by the world on insertion
    pub id: EntityId,
    pub kind: ObjectKind,
    /// Top-left corner of the hitbox
    pub position: Point,
    pub hitbox: Size,
    pub control: Control,
    pub color: Color,
    pub lives: i32,
    /// Awarded to the running total on destruction
    pub score: u64,
}

impl GameObject {
    /// An enemy with a loaded fire cooldown
    pub fn enemy(position: Point, fire_probability: f64) -> Self {
        Self {
            id: 0,
            kind: ObjectKind::Enemy(EnemyState {
                fire_cooldown: ENEMY_FIRE_COOLDOWN,
                fire_probability,
            }),
            position,
            hitbox: Size::square(ENEMY_SIZE),
            control: Control::default(),
            color: palette::ENEMY,
            lives: ENEMY_LIVES,
            score: ENEMY_SCORE,
        }
    }

    /// A player shot flying straight right
    pub fn player_projectile(position: Point) -> Self {
        let displacement = Vector::new(PLAYER_PROJECTILE_SPEED, 0.0);
        Self::projectile(
            ObjectKind::PlayerProjectile,
            position,
            displacement,
            palette::PLAYER_PROJECTILE,
        )
    }

    /// An enemy shot aimed from `from` at `target`
    ///
    /// Fails when the two points coincide, since there is no bearing.
    pub fn enemy_projectile(from: Point, target: Point) -> Result<Self, VectorError> {
        let displacement = Vector::between(from, target)
            .normalize()?
            .scale(ENEMY_PROJECTILE_SPEED);
        Ok(Self::projectile(
            ObjectKind::EnemyProjectile,
            from,
            displacement,
            palette::ENEMY_PROJECTILE,
        ))
    }

    fn projectile(kind: ObjectKind, position: Point, displacement: Vector, color: Color) -> Self {
        Self {
            id: 0,
            kind,
            position,
            hitbox: Size::square(PROJECTILE_SIZE),
            control: Control::single(ControlElement::constant_displacement(displacement)),
            color,
            lives: 1,
            score: 0,
        }
    }

    pub fn with_control(mut self, control: Control) -> Self {
        self.control = control;
        self
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.lives <= 0
    }

    /// Advance position through the control
    pub fn update(&mut self, lookup: &dyn PositionLookup) {
        let ctx = ControlContext {
            lookup,
            steering: None,
        };
        self.position = self.control.next_position(self.position, &ctx);
    }

    /// Decide on spawns for this tick
    ///
    /// Enemies count their cooldown down and, once it is zero, roll against
    /// their fire probability to shoot at `target`.
    pub fn action<R: Rng>(&mut self, target: Point, rng: &mut R) -> Option<GameObject> {
        let ObjectKind::Enemy(enemy) = &mut self.kind else {
            return None;
        };

        if enemy.fire_cooldown > 0 {
            enemy.fire_cooldown -= 1;
            return None;
        }
        if rng.random::<f64>() >= enemy.fire_probability {
            return None;
        }

        match GameObject::enemy_projectile(self.position, target) {
            Ok(projectile) => {
                enemy.fire_cooldown = ENEMY_FIRE_COOLDOWN;
                Some(projectile)
            }
            Err(e) => {
                log::warn!("Enemy {} holds fire: {}", self.id, e);
                None
            }
        }
    }

    /// Debris left behind when this object is destroyed
    pub fn destroy<R: Rng>(&self, rng: &mut R) -> Vec<Particle> {
        burst(
            self.position,
            self.hitbox,
            self.color,
            self.faction().burst_spec(),
            rng,
        )
    }
}

impl Collider for GameObject {
    fn faction(&self) -> Faction {
        match self.kind {
            ObjectKind::Enemy(_) => Faction::Enemy,
            ObjectKind::PlayerProjectile => Faction::PlayerProjectile,
            ObjectKind::EnemyProjectile => Faction::EnemyProjectile,
        }
    }

    fn hit_rect(&self) -> Rect {
        Rect::at(self.position, self.hitbox)
    }
}

//! JADIC - a side-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Seeded simulation (entities, motion controls, collisions, world)
//! - `scene`: Scene state machine (intro, fly-in, endless mode, game over)
//! - `game`: Scene sequencing and the per-frame entry point
//! - `renderer`: Drawing commands issued against a host-provided canvas
//! - `settings`: Data-driven session configuration

pub mod color;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use game::Game;
pub use input::{Key, KeyEvent};
pub use settings::{Settings, SettingsError};

/// Integer screen coordinate
pub type Point = glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Entities further than this beyond the visible area are discarded
    pub const DESPAWN_MARGIN: i32 = 500;

    /// Player ship
    pub const PLAYER_SIZE: i32 = 50;
    pub const PLAYER_SPEED: i32 = 5;
    pub const PLAYER_LIVES: i32 = 3;
    pub const PLAYER_PROJECTILE_COOLDOWN: u32 = 25;
    pub const PLAYER_PROJECTILE_SPEED: f64 = 15.0;
    /// Inset of the player's movement box from the screen edge
    pub const PLAYER_BOX_INSET: i32 = 50;
    /// Fly-in transition speed
    pub const FLY_IN_SPEED: u32 = 3;

    /// Enemies
    pub const ENEMY_SIZE: i32 = 70;
    pub const ENEMY_LIVES: i32 = 1;
    pub const ENEMY_SCORE: u64 = 100;
    pub const ENEMY_FIRE_COOLDOWN: u32 = 60;
    pub const ENEMY_FIRE_PROBABILITY: f64 = 0.3;
    pub const ENEMY_PROJECTILE_SPEED: f64 = 10.0;
    pub const ENEMY_FOLLOW_SPEED: u32 = 5;
    /// Keep spawned enemies this far from the top and bottom edges
    pub const ENEMY_SPAWN_MARGIN: i32 = 100;

    /// Projectiles (both factions)
    pub const PROJECTILE_SIZE: i32 = 10;

    /// Destruction particles
    pub const PARTICLE_SPEED: f64 = 30.0;
    pub const PARTICLE_MIN_SIZE: i32 = 3;
    pub const PARTICLE_MAX_SIZE: i32 = 8;
    pub const PROJECTILE_PARTICLE_MIN_SIZE: i32 = 1;
    pub const PROJECTILE_PARTICLE_MAX_SIZE: i32 = 3;
    /// Enemies only burst a quarter of their hitbox area
    pub const ENEMY_MATTER_DIVISOR: f64 = 4.0;

    /// Parallax background
    pub const STAR_COUNT: usize = 30;
    pub const STAR_BASE_SPEED: i32 = 1;

    /// Largest values settings may carry
    pub const MAX_SCREEN_SIZE: i32 = 16_384;
    pub const MAX_DESPAWN_MARGIN: i32 = 10_000;
    pub const MAX_STAR_COUNT: usize = 10_000;
    pub const MAX_STAR_SPEED: i32 = 100;

    /// Intro prompt blink period (ticks)
    pub const BLINK_INTERVAL: u32 = 10;
}

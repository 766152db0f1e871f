//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per host tick
//! - Seeded RNG only, owned by the World
//! - Stable iteration order (object insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod control;
pub mod object;
pub mod particle;
pub mod player;
pub mod rect;
pub mod starfield;
pub mod tick;
pub mod vector;
pub mod world;

/// Identity of the player or a game object within one World
pub type EntityId = u32;

pub use collision::CollisionReport;
pub use control::{Control, ControlElement, ElementState, Motion, PositionLookup, PositionSnapshot};
pub use object::{Collider, Faction, GameObject, ObjectKind};
pub use particle::Particle;
pub use player::Player;
pub use rect::{Rect, Size};
pub use starfield::{Star, Starfield};
pub use vector::{Vector, VectorError};
pub use world::World;

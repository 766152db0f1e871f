//! RGBA colors shared by the simulation (entity tint) and the renderer

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build from a 0xRRGGBB literal
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl Default for Color {
    fn default() -> Self {
        palette::WHITE
    }
}

/// Colors for game elements
pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const PLAYER: Color = WHITE;
    pub const PLAYER_PROJECTILE: Color = WHITE;
    pub const ENEMY: Color = Color::hex(0xc70039);
    pub const ENEMY_PROJECTILE: Color = Color::hex(0xff6347); // tomato
    pub const STAR: Color = WHITE;
    pub const BACKGROUND: Color = BLACK;
    pub const HUD: Color = WHITE;
}

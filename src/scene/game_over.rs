//! Game over screen
//!
//! Enemies and projectiles are cleared on entry. Leftover debris keeps
//! drifting behind the message until the player restarts.

use crate::Point;
use crate::color::palette;
use crate::input::KeyEvent;
use crate::renderer::{Anchor, Canvas, FontWeight, TextStyle, overlay, shapes};
use crate::sim::{World, tick};

pub const TITLE: &str = "GAME OVER";
pub const PROMPT: &str = "Press ENTER to restart";
const TITLE_STYLE: TextStyle = TextStyle::new(120, FontWeight::Bold, Anchor::Center);
const PROMPT_STYLE: TextStyle = TextStyle::new(20, FontWeight::Regular, Anchor::Center);

#[derive(Debug, Clone)]
pub struct GameOver {
    pub running: bool,
}

impl GameOver {
    pub fn enter(world: &mut World) -> Self {
        world.objects.clear();
        log::info!("Game over with {} points", world.total_score);
        Self { running: true }
    }

    pub fn update(&mut self, world: &mut World) {
        tick::update_ambient(world);
        tick::clean_up(world);
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        if event.is_confirm_press() {
            self.running = false;
        }
    }

    pub fn render(&self, world: &World, canvas: &mut dyn Canvas) {
        shapes::draw_world(canvas, world);
        overlay::draw(canvas, world);

        let center = world.resolution;
        let (cx, cy) = (center.width / 2, center.height / 2);
        canvas.draw_text(TITLE, Point::new(cx, cy - 100), TITLE_STYLE, palette::WHITE);
        canvas.draw_text(PROMPT, Point::new(cx, cy + 50), PROMPT_STYLE, palette::WHITE);
    }
}

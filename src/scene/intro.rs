//! Title screen with a blinking prompt

use crate::Point;
use crate::color::palette;
use crate::consts::BLINK_INTERVAL;
use crate::input::KeyEvent;
use crate::renderer::{Anchor, Canvas, FontWeight, Image, TextStyle, overlay, shapes};
use crate::sim::{World, tick};

pub const PROMPT: &str = "Press ENTER to continue";
const PROMPT_STYLE: TextStyle = TextStyle::new(20, FontWeight::Italic, Anchor::TopLeft);

#[derive(Debug, Clone)]
pub struct Intro {
    pub running: bool,
    timer: u32,
    showing_prompt: bool,
}

impl Intro {
    pub fn enter(_world: &mut World) -> Self {
        Self {
            running: true,
            timer: 0,
            showing_prompt: true,
        }
    }

    pub fn showing_prompt(&self) -> bool {
        self.showing_prompt
    }

    pub fn update(&mut self, world: &mut World) {
        tick::update_ambient(world);

        self.timer += 1;
        if self.timer >= BLINK_INTERVAL {
            self.showing_prompt = !self.showing_prompt;
            self.timer = 0;
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        if event.is_confirm_press() {
            self.running = false;
        }
    }

    pub fn render(&self, world: &World, canvas: &mut dyn Canvas) {
        shapes::draw_world(canvas, world);
        overlay::draw(canvas, world);

        let res = world.resolution;
        let logo_at = Point::new(res.width / 2, res.height / 2 - 100);
        canvas.draw_image(Image::Logo, logo_at, Anchor::Center);
        canvas.draw_image(Image::Wasd, Point::new(270, 520), Anchor::TopLeft);
        canvas.draw_image(Image::Spacebar, Point::new(570, 575), Anchor::TopLeft);

        if self.showing_prompt {
            canvas.draw_text(PROMPT, Point::new(450, 450), PROMPT_STYLE, palette::WHITE);
        }
    }
}

//! The ship glides in from the left edge; input is ignored

use crate::consts::FLY_IN_SPEED;
use crate::renderer::{Canvas, overlay, shapes};
use crate::sim::{Control, ControlElement, World, tick};

#[derive(Debug, Clone)]
pub struct FlyIn {
    pub running: bool,
}

impl FlyIn {
    /// Put the player on a one-shot transition to the middle of its box
    pub fn enter(world: &mut World) -> Self {
        let destination = world.fly_in_destination();
        world.player.control = Control::single(ControlElement::linear_transition(destination, FLY_IN_SPEED));
        world.player.horizontal = 0;
        world.player.vertical = 0;
        Self { running: true }
    }

    pub fn update(&mut self, world: &mut World) {
        tick::update_player(world);
        tick::update_objects(world);
        tick::update_ambient(world);
        tick::clean_up(world);
        self.running = !world.player.control.is_ended();
    }

    pub fn render(&self, world: &World, canvas: &mut dyn Canvas) {
        shapes::draw_world(canvas, world);
        overlay::draw(canvas, world);
    }
}

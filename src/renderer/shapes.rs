//! Shape generation and world drawing

use super::Canvas;
use crate::Point;
use crate::color::palette;
use crate::sim::{GameObject, ObjectKind, Particle, Player, Rect, Starfield, World};

/// Ship outline: flat back on the left, nose at the middle right
pub fn triangle(bounds: Rect) -> [Point; 3] {
    let center = bounds.center();
    let (hw, hh) = (bounds.width / 2, bounds.height / 2);
    [
        Point::new(center.x - hw, center.y - hh),
        Point::new(center.x + hw, center.y),
        Point::new(center.x - hw, center.y + hh),
    ]
}

/// Rhombus touching the middle of each side, clockwise from the top
pub fn diamond(bounds: Rect) -> [Point; 4] {
    [
        Point::new(bounds.x + bounds.width / 2, bounds.y),
        Point::new(bounds.right(), bounds.y + bounds.height / 2),
        Point::new(bounds.x + bounds.width / 2, bounds.bottom()),
        Point::new(bounds.x, bounds.y + bounds.height / 2),
    ]
}

/// Clear to the background color and draw every star
pub fn draw_starfield(canvas: &mut dyn Canvas, starfield: &Starfield) {
    canvas.clear(palette::BACKGROUND);
    for star in &starfield.stars {
        let bounds = Rect::new(star.position.x, star.position.y, star.size, star.size);
        canvas.fill_ellipse(bounds, palette::STAR);
    }
}

/// A destroyed ship is not drawn
pub fn draw_player(canvas: &mut dyn Canvas, player: &Player) {
    if player.is_destroyed() {
        return;
    }
    let bounds = Rect::at(player.position, player.hitbox);
    canvas.fill_polygon(&triangle(bounds), player.color);
}

pub fn draw_object(canvas: &mut dyn Canvas, object: &GameObject) {
    let bounds = Rect::at(object.position, object.hitbox);
    match object.kind {
        ObjectKind::Enemy(_) => canvas.fill_polygon(&diamond(bounds), object.color),
        ObjectKind::PlayerProjectile | ObjectKind::EnemyProjectile => {
            canvas.fill_rect(bounds, object.color)
        }
    }
}

pub fn draw_particle(canvas: &mut dyn Canvas, particle: &Particle) {
    let bounds = Rect::new(particle.position.x, particle.position.y, particle.size, particle.size);
    canvas.fill_rect(bounds, particle.color);
}

/// Background, player, objects, particles, back to front
pub fn draw_world(canvas: &mut dyn Canvas, world: &World) {
    draw_starfield(canvas, &world.starfield);
    draw_player(canvas, &world.player);
    for object in &world.objects {
        draw_object(canvas, object);
    }
    for particle in &world.particles {
        draw_particle(canvas, particle);
    }
}

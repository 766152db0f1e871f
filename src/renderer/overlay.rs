//! Heads-up display drawn over the play field
//!
//! Border, remaining lives, the player's shot cooldown and the score. The
//! whole overlay shifts slightly against the direction the player is
//! steering.

use super::{Anchor, Canvas, FontWeight, Image, TextStyle};
use crate::Point;
use crate::color::palette;
use crate::consts::PLAYER_PROJECTILE_COOLDOWN;
use crate::sim::{Rect, World};

const EDGE_OFFSET: i32 = 25;
/// Gap between the border and the widgets inside it
const INSET: i32 = 20;
const BORDER_THICKNESS: i32 = 10;
const MOVE_JITTER: i32 = 2;
const METER_WIDTH: i32 = 300;
const METER_HEIGHT: i32 = 10;
const HEART_SIZE: i32 = 50;
const HEART_PADDING: i32 = 10;
const SCORE_STYLE: TextStyle = TextStyle::new(25, FontWeight::Bold, Anchor::TopRight);

/// Filled width of the cooldown meter; full when a shot is ready
pub fn meter_width(cooldown: u32) -> i32 {
    let cooldown = cooldown.min(PLAYER_PROJECTILE_COOLDOWN) as i32;
    METER_WIDTH - cooldown * METER_WIDTH / PLAYER_PROJECTILE_COOLDOWN as i32
}

/// A stroked rectangle as four filled bars centered on its outline
fn draw_border(canvas: &mut dyn Canvas, outline: Rect) {
    let half = BORDER_THICKNESS / 2;
    let outer = outline.inflate(half);
    let t = BORDER_THICKNESS;
    canvas.fill_rect(Rect::new(outer.x, outer.y, outer.width, t), palette::HUD);
    canvas.fill_rect(Rect::new(outer.x, outer.bottom() - t, outer.width, t), palette::HUD);
    canvas.fill_rect(Rect::new(outer.x, outer.y + t, t, outer.height - 2 * t), palette::HUD);
    canvas.fill_rect(
        Rect::new(outer.right() - t, outer.y + t, t, outer.height - 2 * t),
        palette::HUD,
    );
}

pub fn draw(canvas: &mut dyn Canvas, world: &World) {
    let player = &world.player;
    let res = world.resolution;
    let dx = player.horizontal * MOVE_JITTER;
    let dy = player.vertical * MOVE_JITTER;

    draw_border(
        canvas,
        Rect::new(
            EDGE_OFFSET - dx,
            EDGE_OFFSET - dy,
            res.width - 2 * EDGE_OFFSET,
            res.height - 2 * EDGE_OFFSET,
        ),
    );

    let left = EDGE_OFFSET + INSET - dx;
    let top = EDGE_OFFSET + INSET - dy;

    let meter = Rect::new(
        left,
        res.height - EDGE_OFFSET - INSET - METER_HEIGHT - dy,
        meter_width(player.projectile_cooldown),
        METER_HEIGHT,
    );
    canvas.fill_rect(meter, palette::HUD);

    for i in 0..player.lives.max(0) {
        let at = Point::new(left + i * (HEART_SIZE + HEART_PADDING), top);
        canvas.draw_image(Image::Heart, at, Anchor::TopLeft);
    }

    let score_at = Point::new(res.width - EDGE_OFFSET - INSET - dx, top);
    canvas.draw_text(&world.total_score.to_string(), score_at, SCORE_STYLE, palette::HUD);
}

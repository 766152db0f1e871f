//! Drives a whole session through the public API with a recording canvas

use jadic::renderer::{DrawCommand, DrawList, Image};
use jadic::scene::SceneKind;
use jadic::{Game, Key, Settings};

fn settings(lives: i32) -> Settings {
    Settings {
        seed: 42,
        player_lives: lives,
        ..Settings::default()
    }
}

fn confirm(game: &mut Game) {
    game.handle_key(Key::Confirm, false);
    game.handle_key(Key::Confirm, true);
}

/// Run frames until the scene changes to `kind`, returning frames taken
fn run_until(game: &mut Game, canvas: &mut DrawList, kind: SceneKind, limit: u32) -> u32 {
    for frame in 1..=limit {
        canvas.take();
        game.next_frame(canvas);
        if game.scene_kind() == kind {
            return frame;
        }
    }
    panic!("no {:?} within {} frames", kind, limit);
}

fn hearts(canvas: &DrawList) -> usize {
    canvas.images().filter(|&i| i == Image::Heart).count()
}

#[test]
fn test_full_cycle_and_restart() {
    let mut game = Game::new(&settings(1)).unwrap();
    let mut canvas = DrawList::new();

    for _ in 0..20 {
        game.next_frame(&mut canvas);
    }
    assert_eq!(game.scene_kind(), SceneKind::Intro);
    assert!(canvas.images().any(|i| i == Image::Logo));

    confirm(&mut game);
    run_until(&mut game, &mut canvas, SceneKind::FlyIn, 1);
    let frames = run_until(&mut game, &mut canvas, SceneKind::Endless, 500);
    assert!(frames > 100);
    assert_eq!(game.world().player.position, game.world().fly_in_destination());

    // A parked ship is found by the first enemy that reaches it
    run_until(&mut game, &mut canvas, SceneKind::GameOver, 5000);
    let world = game.world();
    assert!(world.player.lives <= 0);
    assert!(world.objects.is_empty());
    assert!(canvas.texts().any(|t| t == "GAME OVER"));
    assert_eq!(hearts(&canvas), 0);

    // Game over waits for confirmation
    for _ in 0..50 {
        game.next_frame(&mut canvas);
    }
    assert_eq!(game.scene_kind(), SceneKind::GameOver);

    confirm(&mut game);
    canvas.take();
    game.next_frame(&mut canvas);
    assert_eq!(game.scene_kind(), SceneKind::FlyIn);
    assert_eq!(game.runs(), 1);

    let world = game.world();
    assert_eq!(world.total_score, 0);
    assert_eq!(world.player.lives, 1);
    assert!(world.objects.is_empty());
    assert!(world.particles.is_empty());
    assert_eq!(hearts(&canvas), 1);
}

#[test]
fn test_render_reflects_same_frame_update() {
    let mut game = Game::new(&settings(3)).unwrap();
    let mut canvas = DrawList::new();
    confirm(&mut game);
    run_until(&mut game, &mut canvas, SceneKind::Endless, 500);

    let mut lives = game.world().player.lives;
    for _ in 0..3000 {
        canvas.take();
        game.next_frame(&mut canvas);
        let now = game.world().player.lives.max(0);
        assert_eq!(hearts(&canvas), now as usize);
        assert!(now <= lives);
        lives = now;
        if game.scene_kind() != SceneKind::Endless {
            break;
        }
    }
}

#[test]
fn test_same_seed_same_frames() {
    let record = || {
        let mut game = Game::new(&settings(3)).unwrap();
        let mut canvas = DrawList::new();
        let mut frames: Vec<Vec<DrawCommand>> = Vec::new();
        for frame in 0..400 {
            match frame {
                5 => confirm(&mut game),
                200 => game.handle_key(Key::Down, false),
                230 => game.handle_key(Key::Down, true),
                _ => {}
            }
            if frame % 7 == 0 {
                game.handle_key(Key::Fire, false);
                game.handle_key(Key::Fire, true);
            }
            game.next_frame(&mut canvas);
            frames.push(canvas.take());
        }
        (frames, game.world().total_score)
    };

    let (a, score_a) = record();
    let (b, score_b) = record();
    assert_eq!(score_a, score_b);
    assert_eq!(a, b);
}

#[test]
fn test_player_steers_within_box() {
    let mut game = Game::new(&settings(3)).unwrap();
    let mut canvas = DrawList::new();
    confirm(&mut game);
    run_until(&mut game, &mut canvas, SceneKind::Endless, 500);

    let start = game.world().player.position;
    game.handle_key(Key::Left, false);
    game.next_frame(&mut canvas);
    if game.scene_kind() == SceneKind::Endless && game.world().player.lives > 0 {
        assert_eq!(game.world().player.position.x, start.x - 5);
    }

    for _ in 0..200 {
        game.next_frame(&mut canvas);
        if game.scene_kind() != SceneKind::Endless {
            break;
        }
    }
    let world = game.world();
    let bounds = world.player_bounding_box();
    assert!(world.player.position.x >= bounds.x);
}

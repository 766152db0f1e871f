//! JADIC headless runner
//!
//! Drives the game with a simple autopilot into a recording canvas and
//! prints a JSON summary of the session.
//!
//! Usage: `jadic [SETTINGS] [--frames N]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cmp::Ordering;
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;
    use serde::Serialize;

    use jadic::renderer::DrawList;
    use jadic::scene::SceneKind;
    use jadic::sim::ObjectKind;
    use jadic::{Game, Key, Settings};

    /// Frames the autopilot lingers on a prompt before confirming
    const PROMPT_DELAY: u64 = 30;

    #[derive(Parser, Debug)]
    #[command(name = "jadic")]
    #[command(about = "Play JADIC headlessly with an autopilot and print a JSON summary")]
    struct Args {
        /// JSON settings file; missing keys use the defaults
        settings: Option<PathBuf>,
        /// Frames to simulate
        #[arg(long, default_value_t = 3600)]
        frames: u64,
    }

    /// Plays the game: tracks the nearest enemy vertically and keeps firing
    #[derive(Default)]
    struct Autopilot {
        /// Vertical key currently held down
        held: Option<Key>,
        waited: u64,
    }

    impl Autopilot {
        fn drive(&mut self, game: &mut Game) {
            match game.scene_kind() {
                SceneKind::Intro | SceneKind::GameOver => {
                    self.release(game);
                    self.waited += 1;
                    if self.waited >= PROMPT_DELAY {
                        self.waited = 0;
                        game.handle_key(Key::Confirm, false);
                        game.handle_key(Key::Confirm, true);
                    }
                }
                SceneKind::FlyIn => {}
                SceneKind::Endless => {
                    self.steer(game);
                    game.handle_key(Key::Fire, false);
                    game.handle_key(Key::Fire, true);
                }
            }
        }

        fn steer(&mut self, game: &mut Game) {
            let world = game.world();
            let me = world.player.center();
            let wanted = world
                .objects
                .iter()
                .filter(|o| matches!(o.kind, ObjectKind::Enemy(_)))
                .min_by_key(|o| (o.position.x - me.x).abs())
                .and_then(|enemy| {
                    let target = enemy.position.y + enemy.hitbox.height / 2;
                    match target.cmp(&me.y) {
                        Ordering::Less if me.y - target > 5 => Some(Key::Up),
                        Ordering::Greater if target - me.y > 5 => Some(Key::Down),
                        _ => None,
                    }
                });

            if wanted != self.held {
                self.release(game);
                if let Some(key) = wanted {
                    game.handle_key(key, false);
                }
                self.held = wanted;
            }
        }

        fn release(&mut self, game: &mut Game) {
            if let Some(key) = self.held.take() {
                game.handle_key(key, true);
            }
        }
    }

    #[derive(Serialize)]
    struct RunSummary {
        seed: u64,
        frames: u64,
        final_scene: SceneKind,
        completed_runs: u32,
        score: u64,
        best_score: u64,
        lives: i32,
        objects: usize,
        particles: usize,
        draw_commands_last_frame: usize,
    }

    pub fn run() -> Result<()> {
        let Args { settings, frames } = Args::parse();
        let settings = match settings {
            Some(path) => Settings::load(&path)
                .with_context(|| format!("failed loading {}", path.display()))?,
            None => Settings::default(),
        };
        let mut game = Game::new(&settings).context("unusable settings")?;
        let mut autopilot = Autopilot::default();
        let mut canvas = DrawList::new();
        let mut best_score = 0;
        let mut last_frame = 0;

        for _ in 0..frames {
            autopilot.drive(&mut game);
            game.next_frame(&mut canvas);
            best_score = best_score.max(game.world().total_score);
            last_frame = canvas.take().len();
        }

        let world = game.world();
        let summary = RunSummary {
            seed: settings.seed,
            frames,
            final_scene: game.scene_kind(),
            completed_runs: game.runs(),
            score: world.total_score,
            best_score,
            lives: world.player.lives,
            objects: world.objects.len(),
            particles: world.particles.len(),
            draw_commands_last_frame: last_frame,
        };
        log::info!(
            "Finished {} frames, best score {}",
            summary.frames,
            summary.best_score
        );
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("JADIC (headless) starting...");

    if let Err(e) = native::run() {
        log::error!("{:#}", e);
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is embedded by a host page; there is nothing to run here
}

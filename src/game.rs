//! Scene sequencing and the per-frame entry point
//!
//! The host calls [`Game::next_frame`] once per clock tick and forwards key
//! transitions to [`Game::handle_key`] as they arrive.

use crate::input::{Key, KeyEvent};
use crate::renderer::Canvas;
use crate::scene::{Scene, SceneKind};
use crate::settings::{Settings, SettingsError};
use crate::sim::World;

pub struct Game {
    world: World,
    scene: Scene,
    /// Completed runs (game overs acknowledged)
    runs: u32,
}

impl Game {
    /// Validate `settings` and open on the intro screen
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut world = World::new(settings);
        let scene = Scene::enter(SceneKind::Intro, &mut world);
        log::info!(
            "Game created: {}x{}, seed {}",
            world.resolution.width,
            world.resolution.height,
            world.seed
        );
        Ok(Self {
            world,
            scene,
            runs: 0,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scene_kind(&self) -> SceneKind {
        self.scene.kind()
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Advance past a finished scene, update, then draw
    ///
    /// Rendering always sees the state left by this frame's update.
    pub fn next_frame(&mut self, canvas: &mut dyn Canvas) {
        if !self.scene.is_running() {
            self.advance();
        }
        self.scene.update(&mut self.world);
        self.scene.render(&self.world, canvas);
    }

    /// Forward a key transition to the active scene
    pub fn handle_key(&mut self, key: Key, release: bool) {
        let event = KeyEvent { key, release };
        self.scene.handle_key(&mut self.world, event);
    }

    fn advance(&mut self) {
        let next = self.scene.kind().next();
        if self.scene.kind() == SceneKind::GameOver {
            self.runs += 1;
            self.world.reset();
            log::info!("Restarting, run {}", self.runs + 1);
        }
        self.scene = Scene::enter(next, &mut self.world);
    }
}

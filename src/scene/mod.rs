//! Scene state machine
//!
//! `Intro → FlyIn → Endless → GameOver`, after which the game restarts at
//! `FlyIn` on a fresh run. A scene borrows the [`World`] mutably for one
//! update or key event, and immutably for rendering.

mod endless;
mod fly_in;
mod game_over;
mod intro;

pub use endless::{Difficulty, EndlessMode};
pub use fly_in::FlyIn;
pub use game_over::GameOver;
pub use intro::Intro;

use serde::{Deserialize, Serialize};

use crate::input::KeyEvent;
use crate::renderer::Canvas;
use crate::sim::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneKind {
    Intro,
    FlyIn,
    Endless,
    GameOver,
}

impl SceneKind {
    /// The scene that follows this one; game over loops back to the fly-in
    pub fn next(self) -> Self {
        match self {
            SceneKind::Intro => SceneKind::FlyIn,
            SceneKind::FlyIn => SceneKind::Endless,
            SceneKind::Endless => SceneKind::GameOver,
            SceneKind::GameOver => SceneKind::FlyIn,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Scene {
    Intro(Intro),
    FlyIn(FlyIn),
    Endless(EndlessMode),
    GameOver(GameOver),
}

impl Scene {
    /// Build a scene and run its entry step against the world
    pub fn enter(kind: SceneKind, world: &mut World) -> Self {
        log::info!("Entering {:?}", kind);
        match kind {
            SceneKind::Intro => Scene::Intro(Intro::enter(world)),
            SceneKind::FlyIn => Scene::FlyIn(FlyIn::enter(world)),
            SceneKind::Endless => Scene::Endless(EndlessMode::enter(world)),
            SceneKind::GameOver => Scene::GameOver(GameOver::enter(world)),
        }
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Intro(_) => SceneKind::Intro,
            Scene::FlyIn(_) => SceneKind::FlyIn,
            Scene::Endless(_) => SceneKind::Endless,
            Scene::GameOver(_) => SceneKind::GameOver,
        }
    }

    /// False once the scene has finished and the game should move on
    pub fn is_running(&self) -> bool {
        match self {
            Scene::Intro(s) => s.running,
            Scene::FlyIn(s) => s.running,
            Scene::Endless(s) => s.running,
            Scene::GameOver(s) => s.running,
        }
    }

    pub fn update(&mut self, world: &mut World) {
        match self {
            Scene::Intro(s) => s.update(world),
            Scene::FlyIn(s) => s.update(world),
            Scene::Endless(s) => s.update(world),
            Scene::GameOver(s) => s.update(world),
        }
    }

    pub fn handle_key(&mut self, world: &mut World, event: KeyEvent) {
        match self {
            Scene::Intro(s) => s.handle_key(event),
            Scene::FlyIn(_) => {}
            Scene::Endless(s) => s.handle_key(world, event),
            Scene::GameOver(s) => s.handle_key(event),
        }
    }

    pub fn render(&self, world: &World, canvas: &mut dyn Canvas) {
        match self {
            Scene::Intro(s) => s.render(world, canvas),
            Scene::FlyIn(s) => s.render(world, canvas),
            Scene::Endless(s) => s.render(world, canvas),
            Scene::GameOver(s) => s.render(world, canvas),
        }
    }
}

use crate::core::scene::Scene;
use crate::api::types::{SoundEvent, GameEvent};
use crate::input::snapshot::{InputSnapshot, KeyBindings};
use crate::renderer::instance::RenderBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Longest frame delta handed to `Game::update`, in seconds (default: 0.1).
    pub max_dt: f32,
    /// World width in pixels.
    pub world_width: f32,
    /// World height in pixels.
    pub world_height: f32,
    /// Maximum number of render instances per frame (default: 512). Extra
    /// instances are dropped from the end of the buffer.
    pub max_instances: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_dt: 0.1,
            world_width: 800.0,
            world_height: 450.0,
            max_instances: 512,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Key codes the runner maps to actions.
    fn key_bindings(&self) -> KeyBindings {
        KeyBindings::default()
    }

    /// Build levels and spawn entities into the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One simulation tick with the elapsed frame time in seconds.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputSnapshot, dt: f32);

    /// Optional read-only render pass for custom render commands.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// Whether the player asked to quit. Polled by the runner after each tick.
    fn exit_requested(&self) -> bool {
        false
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Emit a sound cue for the host's audio player.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event for the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub scene: &'a Scene,
    pub render_buffer: &'a mut RenderBuffer,
}

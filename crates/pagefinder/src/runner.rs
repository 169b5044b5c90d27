use crate::api::game::{EngineContext, Game, GameConfig, RenderContext};
use crate::api::types::{GameEvent, SoundEvent};
use crate::core::time::FrameClock;
use crate::input::queue::{InputEvent, InputQueue};
use crate::input::snapshot::{InputSnapshot, InputState, KeyBindings};
use crate::renderer::instance::RenderBuffer;
use crate::systems::animation::tick_animations;
use crate::systems::render::build_render_buffer;

/// Headless frame driver. The host owns the window and the clock; it pushes
/// key events, calls `tick` with the elapsed frame time and then reads the
/// render buffer, sound cues and game events.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    keys: InputState,
    bindings: KeyBindings,
    last_input: InputSnapshot,
    render_buffer: RenderBuffer,
    clock: FrameClock,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let bindings = game.key_bindings();
        Self {
            clock: FrameClock::new(config.max_dt),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            keys: InputState::new(),
            bindings,
            last_input: InputSnapshot::idle(),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.bindings = self.game.key_bindings();
        self.clock = FrameClock::new(self.config.max_dt);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::debug!("runner initialized ({} entities)", self.ctx.scene.len());
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: input, update, animation, render buffer.
    pub fn tick(&mut self, frame_dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        self.keys.apply(self.input.drain());
        self.last_input = self.keys.snapshot(&self.bindings);

        let dt = self.clock.advance(frame_dt);
        self.game.update(&mut self.ctx, &self.last_input, dt);

        tick_animations(&mut self.ctx.scene, dt);

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        {
            let mut render_ctx = RenderContext {
                scene: &self.ctx.scene,
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }
        let instances = self.render_buffer.instances.len();
        if instances > self.config.max_instances {
            log::warn!("dropping {} render instances", instances - self.config.max_instances);
            self.render_buffer.instances.truncate(self.config.max_instances);
        }

        if self.ctx.sounds.len() > self.config.max_sounds {
            log::warn!("dropping {} sound cues", self.ctx.sounds.len() - self.config.max_sounds);
            self.ctx.sounds.truncate(self.config.max_sounds);
        }
        if self.ctx.events.len() > self.config.max_events {
            log::warn!("dropping {} game events", self.ctx.events.len() - self.config.max_events);
            self.ctx.events.truncate(self.config.max_events);
        }
    }

    /// Forget held keys, e.g. when the window loses focus.
    pub fn release_all_keys(&mut self) {
        self.keys.release_all();
    }

    /// World size in pixels, for sizing the host's view.
    pub fn world_size(&self) -> (f32, f32) {
        (self.config.world_width, self.config.world_height)
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    /// Snapshot the last tick ran with.
    pub fn last_input(&self) -> InputSnapshot {
        self.last_input
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Game and context together, for calls like `PageFinder::set_level`.
    pub fn parts_mut(&mut self) -> (&mut G, &mut EngineContext) {
        (&mut self.game, &mut self.ctx)
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.now()
    }

    pub fn should_exit(&self) -> bool {
        self.game.exit_requested()
    }
}

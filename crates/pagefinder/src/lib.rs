pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod runner;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig, RenderContext};
pub use api::types::{EntityId, GameEvent, SoundEvent};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{SpriteFrames, SpriteRegistry};
pub use components::actor::{ActorState, MovementState};
pub use components::animation::{AnimationComponent, AnimationDef};
pub use components::entity::{Behavior, Entity};
pub use components::rect::PixelRect;
pub use components::sprite::{SheetId, SpriteComponent};
pub use core::collision::{intersects, Hit, Resolution, EDGE_PADDING};
pub use core::geometry::{collider, collision_rect, draw_rect, Collider};
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use error::DataError;
pub use game::config::{GravityScaling, MovementParams, PageFinderConfig};
pub use game::hud::{Backdrop, Hud};
pub use game::level::{LevelDef, LevelSet};
pub use game::pagefinder::PageFinder;
pub use input::queue::{InputEvent, InputQueue};
pub use input::snapshot::{keys, InputSnapshot, InputState, KeyBindings};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use runner::GameRunner;
pub use systems::animation::tick_animations;
pub use systems::movement::{step_actor, StepReport};
pub use systems::progression::{lose_life, LevelProgress, LifeOutcome};

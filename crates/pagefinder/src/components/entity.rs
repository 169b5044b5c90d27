use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::actor::ActorState;
use crate::components::animation::AnimationComponent;
use crate::components::sprite::SpriteComponent;

/// What an entity does each tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    /// Platform geometry. Never moves.
    Static,
    /// Collectible that ends the level.
    Goal,
    /// Player-controlled actor.
    Actor(ActorState),
}

/// Fat Entity: a single struct shared by platforms, the goal and the actor.
/// Variant-specific state lives in `behavior`.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Arena index, assigned by `Scene::spawn`.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is in the visible set (inactive entities are skipped).
    pub active: bool,
    /// Position in world space; meaning depends on `sprite.origin`.
    pub pos: Vec2,
    /// Displacement applied per tick.
    pub vel: Vec2,
    pub sprite: SpriteComponent,
    pub animation: AnimationComponent,
    pub behavior: Behavior,
}

impl Entity {
    /// Create a static entity at the origin. The id is assigned on spawn.
    pub fn new() -> Self {
        Self {
            id: EntityId(0),
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            sprite: SpriteComponent::default(),
            animation: AnimationComponent::default(),
            behavior: Behavior::Static,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn with_animation(mut self, animation: AnimationComponent) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    // -- Behavior access --

    pub fn actor(&self) -> Option<&ActorState> {
        match &self.behavior {
            Behavior::Actor(state) => Some(state),
            _ => None,
        }
    }

    pub fn actor_mut(&mut self) -> Option<&mut ActorState> {
        match &mut self.behavior {
            Behavior::Actor(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self.behavior, Behavior::Goal)
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

//! Entity builders for the three kinds of thing in a level.

use glam::Vec2;

use crate::assets::registry::SpriteFrames;
use crate::components::actor::ActorState;
use crate::components::entity::{Behavior, Entity};
use crate::error::DataError;

pub const PLAYER_TAG: &str = "player";
pub const GOAL_TAG: &str = "page";
pub const PLATFORM_TAG: &str = "platform";

/// Static platform tile anchored at its top-centre.
pub fn platform(frames: &SpriteFrames, pos: Vec2) -> Entity {
    Entity::new()
        .with_tag(PLATFORM_TAG)
        .with_pos(pos)
        .with_sprite(frames.sprite().with_origin(Vec2::new(0.5, 0.0)).colliding())
        .with_animation(frames.animation.clone())
}

/// The page, anchored at its centre.
pub fn goal(frames: &SpriteFrames, pos: Vec2) -> Entity {
    Entity::new()
        .with_tag(GOAL_TAG)
        .with_pos(pos)
        .with_sprite(frames.sprite().with_origin(Vec2::splat(0.5)).colliding())
        .with_animation(frames.animation.clone())
        .with_behavior(Behavior::Goal)
}

/// The player, anchored at top-centre. Its collision box is trimmed by the
/// frames' insets, which must leave some area.
pub fn player(frames: &SpriteFrames, spawn: Vec2, lives: u8) -> Result<Entity, DataError> {
    let sprite = frames.sprite().with_origin(Vec2::new(0.5, 0.0)).colliding();
    if !sprite.insets_valid() {
        return Err(DataError::DegenerateInsets(PLAYER_TAG.to_string()));
    }
    Ok(Entity::new()
        .with_tag(PLAYER_TAG)
        .with_pos(spawn)
        .with_sprite(sprite)
        .with_animation(frames.animation.clone())
        .with_behavior(Behavior::Actor(ActorState::new(lives))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::AssetManifest;
    use crate::assets::registry::SpriteRegistry;
    use crate::components::rect::PixelRect;
    use crate::core::geometry::{collision_rect, draw_rect};

    fn registry() -> SpriteRegistry {
        SpriteRegistry::from_manifest(&AssetManifest::builtin().unwrap())
    }

    #[test]
    fn platform_geometry() {
        let reg = registry();
        let p = platform(reg.require("platform").unwrap(), Vec2::new(400.0, 440.0));
        assert_eq!(collision_rect(&p), PixelRect::new(352, 440, 96, 32));
        assert!(matches!(p.behavior, Behavior::Static));
    }

    #[test]
    fn goal_is_centred() {
        let reg = registry();
        let g = goal(reg.require("page").unwrap(), Vec2::new(200.0, 200.0));
        assert_eq!(draw_rect(&g), PixelRect::new(176, 176, 48, 48));
        assert!(g.is_goal());
        assert_eq!(g.animation.frame_duration, 1.0);
    }

    #[test]
    fn player_spawns_falling_with_trimmed_box() {
        let reg = registry();
        let p = player(reg.require("player").unwrap(), Vec2::new(60.0, 400.0), 3).unwrap();
        assert_eq!(collision_rect(&p), PixelRect::new(48, 414, 24, 34));
        let state = p.actor().unwrap();
        assert!(state.falling);
        assert_eq!(state.lives, 3);
        assert_eq!(p.animation.animations.len(), 4);
    }

    #[test]
    fn player_rejects_frames_with_degenerate_insets() {
        let reg = registry();
        let mut frames = reg.require("player").unwrap().clone();
        frames.inset_min = Vec2::new(0.5, 0.3);
        frames.inset_max = Vec2::new(0.5, 0.0);
        assert!(matches!(
            player(&frames, Vec2::new(60.0, 400.0), 3),
            Err(DataError::DegenerateInsets(tag)) if tag == PLAYER_TAG
        ));
    }
}

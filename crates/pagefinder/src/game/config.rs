use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::game::GameConfig;
use crate::core::collision::EDGE_PADDING;
use crate::error::DataError;
use crate::input::snapshot::KeyBindings;

/// How gravity is applied to vertical velocity each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityScaling {
    /// `vel.y += gravity * dt`.
    #[default]
    Elapsed,
    /// `vel.y += gravity` once per tick, regardless of frame time.
    PerTick,
}

/// Tuning for the actor's movement step.
///
/// Velocities are pixels per tick: walking is `walk_speed * dt`, a jump
/// subtracts `jump_impulse` from `vel.y` once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementParams {
    pub walk_speed: f32,
    pub jump_impulse: f32,
    pub gravity: f32,
    pub gravity_scaling: GravityScaling,
    /// Gravity stops accumulating once `vel.y` reaches this.
    pub max_fall_speed: f32,
    /// Perpendicular overlap a directional hit needs, in pixels.
    pub edge_padding: i32,
    /// Cap on unit steps per push-until-clear pass.
    pub max_resolve_steps: u32,
}

impl MovementParams {
    pub fn gravity_step(&self, dt: f32) -> f32 {
        match self.gravity_scaling {
            GravityScaling::Elapsed => self.gravity * dt,
            GravityScaling::PerTick => self.gravity,
        }
    }
}

impl Default for MovementParams {
    fn default() -> Self {
        Self {
            walk_speed: 200.0,
            jump_impulse: 6.5,
            gravity: 10.0,
            gravity_scaling: GravityScaling::Elapsed,
            max_fall_speed: 500.0,
            edge_padding: EDGE_PADDING,
            max_resolve_steps: 256,
        }
    }
}

/// Game-level settings for PageFinder. Every field has a default, so a JSON
/// file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageFinderConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// How far below the screen bottom the actor may drop before losing a life.
    pub fall_margin: f32,
    pub player_spawn: Vec2,
    pub max_lives: u8,
    /// Start with the collision overlay enabled.
    pub debug_collision: bool,
    pub bindings: KeyBindings,
    pub movement: MovementParams,
}

impl Default for PageFinderConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 450.0,
            fall_margin: 50.0,
            player_spawn: Vec2::new(60.0, 400.0),
            max_lives: 3,
            debug_collision: false,
            bindings: KeyBindings::default(),
            movement: MovementParams::default(),
        }
    }
}

impl PageFinderConfig {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Vertical position past which the actor counts as fallen out.
    pub fn kill_line(&self) -> f32 {
        self.screen_height + self.fall_margin
    }

    /// Engine settings derived from the screen size.
    pub fn engine_config(&self) -> GameConfig {
        GameConfig {
            world_width: self.screen_width,
            world_height: self.screen_height,
            ..GameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_game() {
        let config = PageFinderConfig::default();
        assert_eq!(config.kill_line(), 500.0);
        assert_eq!(config.player_spawn, Vec2::new(60.0, 400.0));
        assert_eq!(config.max_lives, 3);
        assert_eq!(config.movement.edge_padding, 5);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PageFinderConfig::from_json(
            r#"{ "max_lives": 5, "movement": { "gravity_scaling": "per_tick", "gravity": 0.2 } }"#,
        )
        .unwrap();
        assert_eq!(config.max_lives, 5);
        assert_eq!(config.movement.gravity_scaling, GravityScaling::PerTick);
        assert_eq!(config.movement.walk_speed, 200.0);
        assert_eq!(config.screen_width, 800.0);
    }

    #[test]
    fn gravity_step_follows_scaling() {
        let mut params = MovementParams::default();
        assert!((params.gravity_step(0.5) - 5.0).abs() < 1e-6);
        params.gravity_scaling = GravityScaling::PerTick;
        assert_eq!(params.gravity_step(0.5), 10.0);
    }

    #[test]
    fn engine_config_uses_screen_size() {
        let config = PageFinderConfig {
            screen_width: 640.0,
            ..PageFinderConfig::default()
        };
        let engine = config.engine_config();
        assert_eq!(engine.world_width, 640.0);
        assert_eq!(engine.world_height, 450.0);
        assert_eq!(engine.max_dt, 0.1);
    }
}

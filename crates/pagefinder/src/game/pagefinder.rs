use std::ops::Range;

use glam::Vec2;

use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::{EntityId, GameEvent};
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::{SpriteFrames, SpriteRegistry};
use crate::components::entity::Entity;
use crate::core::collision::entities_intersect;
use crate::core::scene::Scene;
use crate::error::DataError;
use crate::game::config::PageFinderConfig;
use crate::game::hud::Hud;
use crate::game::level::LevelSet;
use crate::game::prefab;
use crate::game::sounds::{self, events};
use crate::input::snapshot::{InputSnapshot, KeyBindings};
use crate::systems::debug::set_collision_overlay;
use crate::systems::movement::step_actor;
use crate::systems::progression::{fell_out, lose_life, LevelProgress, LifeOutcome};

/// The platformer: one actor, one page and a wrapping sequence of levels.
///
/// All levels are spawned at init. Each level's platforms occupy a contiguous
/// arena range and only the current level's range is active.
pub struct PageFinder {
    config: PageFinderConfig,
    levels: LevelSet,
    platform_frames: SpriteFrames,
    goal_frames: SpriteFrames,
    player_template: Entity,
    level_ranges: Vec<Range<usize>>,
    progress: LevelProgress,
    goal: Option<EntityId>,
    actor: Option<EntityId>,
    exit: bool,
}

impl PageFinder {
    /// Resolve sprites and build the player template. Fails if the registry
    /// lacks any of the three sprites.
    pub fn new(
        config: PageFinderConfig,
        levels: LevelSet,
        registry: &SpriteRegistry,
    ) -> Result<Self, DataError> {
        if levels.is_empty() {
            return Err(DataError::NoLevels);
        }
        let player_template = prefab::player(
            registry.require(prefab::PLAYER_TAG)?,
            config.player_spawn,
            config.max_lives,
        )?;
        let progress = LevelProgress::new(levels.len());
        Ok(Self {
            platform_frames: registry.require(prefab::PLATFORM_TAG)?.clone(),
            goal_frames: registry.require(prefab::GOAL_TAG)?.clone(),
            player_template,
            config,
            levels,
            level_ranges: Vec::new(),
            progress,
            goal: None,
            actor: None,
            exit: false,
        })
    }

    /// Stock levels, sprites and settings.
    pub fn with_defaults() -> Result<Self, DataError> {
        let registry = SpriteRegistry::from_manifest(&AssetManifest::builtin()?);
        Self::new(PageFinderConfig::default(), LevelSet::builtin()?, &registry)
    }

    pub fn settings(&self) -> &PageFinderConfig {
        &self.config
    }

    pub fn level_index(&self) -> usize {
        self.progress.index
    }

    pub fn level_count(&self) -> usize {
        self.progress.count
    }

    pub fn actor_id(&self) -> Option<EntityId> {
        self.actor
    }

    pub fn goal_id(&self) -> Option<EntityId> {
        self.goal
    }

    /// Arena range holding a level's platforms.
    pub fn level_range(&self, index: usize) -> Option<Range<usize>> {
        self.level_ranges.get(index).cloned()
    }

    pub fn hud(&self, scene: &Scene) -> Hud {
        let lives = self
            .actor
            .and_then(|id| scene.get(id))
            .and_then(Entity::actor)
            .map_or(0, |state| state.lives);
        Hud::new(lives, self.progress.index)
    }

    /// Jump straight to a level, e.g. from a level-select screen.
    /// Out-of-range indices are ignored.
    pub fn set_level(&mut self, ctx: &mut EngineContext, index: usize) {
        let from = self.progress.index;
        if !self.progress.select(index) {
            log::debug!("ignoring level {} (have {})", index, self.progress.count);
            return;
        }
        self.activate_level(&mut ctx.scene, from, index);
        self.reset_actor(&mut ctx.scene);
    }

    pub fn set_debug_collision(&mut self, ctx: &mut EngineContext, enabled: bool) {
        self.config.debug_collision = enabled;
        set_collision_overlay(&mut ctx.scene, enabled);
    }

    fn activate_level(&self, scene: &mut Scene, from: usize, to: usize) {
        if let Some(old) = self.level_ranges.get(from) {
            scene.set_active(old.clone(), false);
        }
        if let Some(new) = self.level_ranges.get(to) {
            scene.set_active(new.clone(), true);
        }
        let goal_pos = self.levels.get(to).map(|level| level.goal);
        if let (Some(goal_pos), Some(goal)) = (goal_pos, self.goal.and_then(|id| scene.get_mut(id))) {
            goal.pos = goal_pos;
        }
    }

    fn reset_actor(&self, scene: &mut Scene) {
        let Some(actor) = self.actor.and_then(|id| scene.get_mut(id)) else {
            return;
        };
        actor.pos = self.config.player_spawn;
        actor.vel = Vec2::ZERO;
        if let Some(state) = actor.actor_mut() {
            state.reset();
        }
    }

    fn check_fall(&mut self, ctx: &mut EngineContext, actor_id: EntityId) {
        let kill_line = self.config.kill_line();
        let Some(actor) = ctx.scene.get_mut(actor_id) else {
            return;
        };
        if !fell_out(actor, kill_line) {
            return;
        }
        let Some(state) = actor.actor_mut() else {
            return;
        };

        match lose_life(state, self.config.max_lives) {
            LifeOutcome::Remaining(lives) => {
                log::info!("life lost, {} left", lives);
                ctx.emit_event(GameEvent::new(events::LIFE_LOST, lives as f32));
            }
            LifeOutcome::Exhausted => {
                log::info!("out of lives, back to level 1");
                let from = self.progress.index;
                self.progress.restart();
                self.activate_level(&mut ctx.scene, from, 0);
                ctx.emit_event(GameEvent::new(events::GAME_OVER, 0.0));
            }
        }
        self.reset_actor(&mut ctx.scene);
    }

    fn check_goal(&mut self, ctx: &mut EngineContext, actor_id: EntityId) {
        let reached = match (ctx.scene.get(actor_id), self.goal.and_then(|id| ctx.scene.get(id))) {
            (Some(actor), Some(goal)) => entities_intersect(actor, goal),
            _ => false,
        };
        if !reached {
            return;
        }

        let from = self.progress.index;
        let to = self.progress.advance();
        log::info!("page found on level {}, moving to level {}", from + 1, to + 1);
        self.activate_level(&mut ctx.scene, from, to);
        self.reset_actor(&mut ctx.scene);
        ctx.emit_sound(sounds::FANFARE);
        ctx.emit_event(GameEvent::new(events::LEVEL_ADVANCED, to as f32));
    }
}

impl Game for PageFinder {
    fn config(&self) -> GameConfig {
        self.config.engine_config()
    }

    fn key_bindings(&self) -> KeyBindings {
        self.config.bindings.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.scene.clear();
        self.level_ranges.clear();
        self.progress.restart();

        for (index, level) in self.levels.levels.iter().enumerate() {
            let start = ctx.scene.len();
            for &pos in &level.platforms {
                let mut platform = prefab::platform(&self.platform_frames, pos);
                platform.active = index == 0;
                ctx.scene.spawn(platform);
            }
            self.level_ranges.push(start..ctx.scene.len());
        }

        // Spawn order is draw order: platforms, then the page, then the player on top.
        let goal_pos = self.levels.get(0).map_or(Vec2::ZERO, |level| level.goal);
        self.goal = Some(ctx.scene.spawn(prefab::goal(&self.goal_frames, goal_pos)));
        self.actor = Some(ctx.scene.spawn(self.player_template.clone()));

        if self.config.debug_collision {
            set_collision_overlay(&mut ctx.scene, true);
        }

        log::info!(
            "built {} levels ({} platforms, {} entities)",
            self.levels.len(),
            self.levels.platform_count(),
            ctx.scene.len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputSnapshot, dt: f32) {
        if input.exit {
            self.exit = true;
        }
        let Some(actor_id) = self.actor else {
            return;
        };
        let Some(platforms) = self.level_range(self.progress.index) else {
            return;
        };

        let report = match ctx.scene.split_one_mut(actor_id, platforms) {
            Some((actor, platforms)) => step_actor(actor, platforms, input, dt, &self.config.movement),
            None => return,
        };
        if report.jumped {
            ctx.emit_sound(sounds::JUMP);
        }
        for _ in 0..report.landings {
            ctx.emit_sound(sounds::BUMP);
        }

        self.check_fall(ctx, actor_id);
        self.check_goal(ctx, actor_id);
    }

    fn exit_requested(&self) -> bool {
        self.exit
    }
}

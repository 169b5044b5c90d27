//! Cue ids emitted by the game. They match `event_id` in the asset manifest.

use crate::api::types::SoundEvent;

pub const JUMP: SoundEvent = SoundEvent(1);
pub const BUMP: SoundEvent = SoundEvent(2);
pub const FANFARE: SoundEvent = SoundEvent(3);

/// `GameEvent::kind` values.
pub mod events {
    /// `a` = lives left.
    pub const LIFE_LOST: f32 = 1.0;
    /// Lives ran out and the run restarted at level 0.
    pub const GAME_OVER: f32 = 2.0;
    /// `a` = new level index.
    pub const LEVEL_ADVANCED: f32 = 3.0;
}

use crate::components::actor::ActorState;
use crate::components::entity::Entity;

/// Current position in a wrapping level sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub index: usize,
    pub count: usize,
}

impl LevelProgress {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Move to the next level, wrapping to the first after the last.
    /// Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index += 1;
        if self.index >= self.count {
            self.index = 0;
        }
        self.index
    }

    pub fn restart(&mut self) {
        self.index = 0;
    }

    /// Jump to a level. Returns false (and changes nothing) if out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.count {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.count
    }
}

/// Result of taking one life from the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeOutcome {
    /// Lives left after the loss.
    Remaining(u8),
    /// The last life went; lives were refilled to the maximum.
    Exhausted,
}

/// Take a life. On running out, lives are restored to `max_lives`.
pub fn lose_life(state: &mut ActorState, max_lives: u8) -> LifeOutcome {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.lives = max_lives;
        LifeOutcome::Exhausted
    } else {
        LifeOutcome::Remaining(state.lives)
    }
}

/// The actor dropped past the kill line below the screen.
pub fn fell_out(actor: &Entity, kill_line: f32) -> bool {
    actor.pos.y > kill_line
}

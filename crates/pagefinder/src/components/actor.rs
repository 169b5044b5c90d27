/// Resolved movement state, used to pick the actor's animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementState {
    Idle,
    Walking,
    Jumping,
    Falling,
}

impl MovementState {
    /// Index into the actor's animation table.
    pub fn animation_index(self) -> usize {
        match self {
            MovementState::Idle => 0,
            MovementState::Walking => 1,
            MovementState::Jumping => 2,
            MovementState::Falling => 3,
        }
    }
}

/// Per-actor movement flags and lives.
///
/// `walking` is horizontal intent and can be set together with any vertical
/// state. `jumping` and `falling` can both be set after a jump taken while
/// walking with no platform contact; the jump flag clears once `vel.y`
/// turns positive. `movement_state` resolves the overlap by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorState {
    pub lives: u8,
    pub jumping: bool,
    pub walking: bool,
    pub falling: bool,
    /// Jump input seen and not yet released on the ground.
    pub jump_held: bool,
}

impl ActorState {
    /// A freshly spawned actor: airborne, so it settles onto the first platform it meets.
    pub fn new(lives: u8) -> Self {
        Self {
            lives,
            jumping: false,
            walking: false,
            falling: true,
            jump_held: false,
        }
    }

    /// Back to the spawn state. Lives and the held-jump latch are kept.
    pub fn reset(&mut self) {
        self.jumping = false;
        self.walking = false;
        self.falling = true;
    }

    pub fn is_grounded(&self) -> bool {
        !self.jumping && !self.falling
    }

    /// Walking > Falling > Jumping > Idle, first match wins.
    pub fn movement_state(&self) -> MovementState {
        if self.walking {
            MovementState::Walking
        } else if self.falling {
            MovementState::Falling
        } else if self.jumping {
            MovementState::Jumping
        } else {
            MovementState::Idle
        }
    }
}

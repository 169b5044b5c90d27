//! Animation component for sprite frame sequences.
//!
//! Animations are addressed by index. Each frame is a source rectangle on the
//! entity's sprite sheet, and its pixel size feeds the geometry derivation, so
//! switching animation can change an entity's draw and collision boxes.

use crate::components::rect::PixelRect;

/// Default seconds per frame for entities that don't set their own.
pub const DEFAULT_FRAME_DURATION: f32 = 0.5;

/// Definition of a single animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Source rectangles on the sprite sheet, in playback order.
    pub frames: Vec<PixelRect>,
}

impl AnimationDef {
    /// A one-frame animation.
    pub fn single(frame: PixelRect) -> Self {
        Self {
            frames: vec![frame],
        }
    }

    /// Create a horizontal strip (consecutive same-sized cells, same row).
    pub fn horizontal_strip(x: i32, y: i32, width: i32, height: i32, frame_count: u32) -> Self {
        let frames = (0..frame_count as i32)
            .map(|i| PixelRect::new(x + i * width, y, width, height))
            .collect();
        Self { frames }
    }

    /// Create from explicit frame list.
    pub fn from_frames(frames: Vec<PixelRect>) -> Self {
        Self { frames }
    }

    /// Get the number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Animation state for an entity.
///
/// `frame_timer` counts down from `frame_duration`. It is reset whenever it
/// runs out or the animation changes.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationComponent {
    /// Animation table, indexed by animation id.
    pub animations: Vec<AnimationDef>,
    /// Currently playing animation index.
    pub current: usize,
    /// Current frame index within the current animation.
    pub frame_index: usize,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
    /// Seconds left before the next frame.
    pub frame_timer: f32,
}

impl Default for AnimationComponent {
    fn default() -> Self {
        Self::single(
            AnimationDef::single(PixelRect::new(0, 0, 48, 48)),
            DEFAULT_FRAME_DURATION,
        )
    }
}

impl AnimationComponent {
    /// Create with a full animation table.
    pub fn new(animations: Vec<AnimationDef>, frame_duration: f32) -> Self {
        Self {
            animations,
            current: 0,
            frame_index: 0,
            frame_duration,
            frame_timer: frame_duration,
        }
    }

    /// Create with a single animation.
    pub fn single(def: AnimationDef, frame_duration: f32) -> Self {
        Self::new(vec![def], frame_duration)
    }

    /// Switch to another animation from its first frame.
    ///
    /// Requests for the animation already playing, or for an index outside the
    /// table, are ignored. Returns whether the animation changed.
    pub fn play(&mut self, index: usize) -> bool {
        if index == self.current {
            return false;
        }
        if index >= self.animations.len() {
            log::debug!(
                "ignoring animation {} (table has {})",
                index,
                self.animations.len()
            );
            return false;
        }
        self.current = index;
        self.frame_index = 0;
        self.frame_timer = self.frame_duration;
        true
    }

    /// Get current animation definition.
    pub fn current_def(&self) -> Option<&AnimationDef> {
        self.animations.get(self.current)
    }

    /// Source rectangle of the frame on screen. A zero-size rect if the table is empty.
    pub fn current_frame(&self) -> PixelRect {
        self.current_def()
            .and_then(|def| def.frames.get(self.frame_index).copied())
            .unwrap_or(PixelRect::EMPTY)
    }

    /// Advance the countdown by dt seconds. Returns true if the frame changed.
    ///
    /// Single-frame animations never tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        let frame_count = match self.current_def() {
            Some(def) => def.frame_count(),
            None => return false,
        };
        if frame_count <= 1 {
            return false;
        }

        let mut frame_changed = false;
        self.frame_timer -= dt;
        if self.frame_timer <= 0.0 {
            self.frame_timer = self.frame_duration;
            self.frame_index += 1;
            frame_changed = true;
        }
        if self.frame_index >= frame_count {
            self.frame_index = 0;
        }

        frame_changed
    }
}

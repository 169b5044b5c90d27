//! Advances frame countdowns for the visible set.

use crate::core::scene::Scene;

/// Tick every active entity's animation.
///
/// Call this once per frame after the simulation update, so the frame shown
/// matches the animation the movement step just selected.
pub fn tick_animations(scene: &mut Scene, dt: f32) {
    for entity in scene.iter_mut() {
        if entity.active {
            entity.animation.tick(dt);
        }
    }
}

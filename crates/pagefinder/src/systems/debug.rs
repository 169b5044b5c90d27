use crate::core::scene::Scene;

/// Toggle the collision-box overlay on every entity in the scene.
pub fn set_collision_overlay(scene: &mut Scene, enabled: bool) {
    for entity in scene.iter_mut() {
        entity.sprite.draw_collision = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;

    #[test]
    fn overlay_toggles_all_entities() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new());
        scene.spawn(Entity::new().inactive());

        set_collision_overlay(&mut scene, true);
        assert!(scene.iter().all(|e| e.sprite.draw_collision));

        set_collision_overlay(&mut scene, false);
        assert!(scene.iter().all(|e| !e.sprite.draw_collision));
    }
}

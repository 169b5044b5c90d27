use crate::components::entity::Entity;
use crate::core::geometry::{collision_rect, draw_rect};
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities, in arena order.
/// Inactive entities are skipped. Entities flagged with `draw_collision`
/// also contribute their collision box to the overlay list.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let sprite = &entity.sprite;
        buffer.push(RenderInstance::new(
            draw_rect(entity),
            entity.animation.current_frame(),
            sprite.flipped,
            sprite.sheet.0,
        ));

        if sprite.draw_collision {
            buffer.collision_boxes.push(collision_rect(entity));
        }
    }
}

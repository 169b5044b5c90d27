//! Draw and collision rectangles derived from sprite placement.
//!
//! Everything here is a pure function of entity state. Float products are
//! truncated toward zero when they become pixels.

use glam::Vec2;

use crate::components::entity::Entity;
use crate::components::rect::PixelRect;
use crate::components::sprite::SpriteComponent;

/// Collision snapshot of an entity: its collision rect plus participation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collider {
    pub rect: PixelRect,
    pub colliding: bool,
}

/// Scaled pixel size of a source frame.
pub fn draw_size(frame: PixelRect, scale: Vec2) -> (i32, i32) {
    (
        (frame.width as f32 * scale.x) as i32,
        (frame.height as f32 * scale.y) as i32,
    )
}

/// Draw rect for a sprite at `pos` showing `frame`.
pub fn draw_rect_for(pos: Vec2, sprite: &SpriteComponent, frame: PixelRect) -> PixelRect {
    let (width, height) = draw_size(frame, sprite.scale);
    let left = (pos.x - width as f32 * sprite.origin.x) as i32;
    let top = (pos.y - height as f32 * sprite.origin.y) as i32;
    PixelRect::new(left, top, width, height)
}

/// Collision rect for a sprite at `pos` showing `frame`.
pub fn collision_rect_for(pos: Vec2, sprite: &SpriteComponent, frame: PixelRect) -> PixelRect {
    let draw = draw_rect_for(pos, sprite, frame);
    let width = draw.width as f32;
    let height = draw.height as f32;
    PixelRect::from_edges(
        draw.left() + (sprite.inset_min.x * width) as i32,
        draw.top() + (sprite.inset_min.y * height) as i32,
        draw.right() - (sprite.inset_max.x * width) as i32,
        draw.bottom() - (sprite.inset_max.y * height) as i32,
    )
}

/// Where and how big the entity is drawn.
pub fn draw_rect(entity: &Entity) -> PixelRect {
    draw_rect_for(entity.pos, &entity.sprite, entity.animation.current_frame())
}

/// The box used for every contact test.
pub fn collision_rect(entity: &Entity) -> PixelRect {
    collision_rect_for(entity.pos, &entity.sprite, entity.animation.current_frame())
}

pub fn collision_center(entity: &Entity) -> Vec2 {
    collision_rect(entity).center()
}

pub fn collider(entity: &Entity) -> Collider {
    Collider {
        rect: collision_rect(entity),
        colliding: entity.sprite.colliding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::{AnimationComponent, AnimationDef};

    fn player_like(pos: Vec2) -> Entity {
        Entity::new()
            .with_pos(pos)
            .with_sprite(
                SpriteComponent::default()
                    .with_origin(Vec2::new(0.5, 0.0))
                    .with_insets(Vec2::new(0.25, 0.3), Vec2::new(0.25, 0.0))
                    .colliding(),
            )
            .with_animation(AnimationComponent::single(
                AnimationDef::single(PixelRect::new(0, 0, 48, 48)),
                0.1,
            ))
    }

    #[test]
    fn draw_rect_applies_origin() {
        let e = player_like(Vec2::new(60.0, 400.0));
        assert_eq!(draw_rect(&e), PixelRect::new(36, 400, 48, 48));

        let mut centred = e.clone();
        centred.sprite.origin = Vec2::splat(0.5);
        assert_eq!(draw_rect(&centred), PixelRect::new(36, 376, 48, 48));
    }

    #[test]
    fn draw_rect_applies_scale() {
        let mut e = player_like(Vec2::new(100.0, 100.0));
        e.sprite = e.sprite.with_scale(Vec2::new(2.0, 0.5));
        let r = draw_rect(&e);
        assert_eq!((r.width, r.height), (96, 24));
        assert_eq!(r.left(), 52);
    }

    #[test]
    fn collision_rect_applies_asymmetric_insets() {
        let e = player_like(Vec2::new(60.0, 400.0));
        let r = collision_rect(&e);
        // 0.25 * 48 = 12 off each side, trunc(0.3 * 48) = 14 off the top
        assert_eq!(r, PixelRect::new(48, 414, 24, 34));
        assert_eq!(r.bottom(), draw_rect(&e).bottom());
    }

    #[test]
    fn fractional_positions_truncate_toward_zero() {
        let e = player_like(Vec2::new(60.9, 400.9));
        assert_eq!(draw_rect(&e).top(), 400);
        assert_eq!(draw_rect(&e).left(), 36);
    }

    #[test]
    fn collision_extent_is_never_negative() {
        let insets = [0.0, 0.1, 0.33, 0.49, 0.7, 0.99];
        for &min in &insets {
            for &max in &insets {
                if min + max >= 1.0 {
                    continue;
                }
                for size in [1, 7, 32, 48, 96] {
                    let mut e = player_like(Vec2::new(13.3, -7.7));
                    e.sprite.inset_min = Vec2::splat(min);
                    e.sprite.inset_max = Vec2::splat(max);
                    e.animation = AnimationComponent::single(
                        AnimationDef::single(PixelRect::new(0, 0, size, size)),
                        1.0,
                    );
                    let r = collision_rect(&e);
                    assert!(r.right() - r.left() >= 0);
                    assert!(r.bottom() - r.top() >= 0);
                }
            }
        }
    }

    #[test]
    fn geometry_is_idempotent() {
        let e = player_like(Vec2::new(123.45, 67.89));
        assert_eq!(draw_rect(&e), draw_rect(&e));
        assert_eq!(collision_rect(&e), collision_rect(&e));
        assert_eq!(
            collision_center(&e).to_array().map(f32::to_bits),
            collision_center(&e).to_array().map(f32::to_bits)
        );
    }

    #[test]
    fn flipping_leaves_collision_alone() {
        let e = player_like(Vec2::new(60.0, 400.0));
        let mut flipped = e.clone();
        flipped.sprite.flipped = true;
        assert_eq!(collision_rect(&e), collision_rect(&flipped));
        assert_eq!(draw_rect(&e), draw_rect(&flipped));
    }
}

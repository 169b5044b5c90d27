//! Pairwise AABB tests, directional contact classification and unit-step
//! penetration resolution.
//!
//! Directional tests are written from the point of view of a moving entity
//! `a` against a static entity `b`. Each one requires a plain intersection
//! plus an edge relation, and the perpendicular edges must overlap by more
//! than `padding` pixels so that clipping a corner doesn't count as a full
//! landing, ceiling or wall hit.

use glam::Vec2;

use crate::components::entity::Entity;
use crate::core::geometry::{collider, Collider};

/// Default perpendicular overlap, in pixels, a directional hit needs.
pub const EDGE_PADDING: i32 = 5;

/// Which edge of the moving entity made contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// `a` came down onto the top of `b`.
    Below,
    /// `a` rose into the underside of `b`.
    Above,
    /// `a` moved right into the left side of `b`.
    Left,
    /// `a` moved left into the right side of `b`.
    Right,
}

impl Hit {
    /// Unit step that pushes `a` back out of `b`.
    pub fn push_direction(self) -> Vec2 {
        match self {
            Hit::Below => Vec2::NEG_Y,
            Hit::Above => Vec2::Y,
            Hit::Left => Vec2::NEG_X,
            Hit::Right => Vec2::X,
        }
    }
}

/// True if both take part in collision and their boxes overlap.
pub fn intersects(a: &Collider, b: &Collider) -> bool {
    a.colliding && b.colliding && a.rect.intersects(&b.rect)
}

fn overlaps_horizontally(a: &Collider, b: &Collider, padding: i32) -> bool {
    a.rect.left() + padding < b.rect.right() && a.rect.right() - padding > b.rect.left()
}

fn overlaps_vertically(a: &Collider, b: &Collider, padding: i32) -> bool {
    a.rect.top() + padding < b.rect.bottom() && a.rect.bottom() - padding > b.rect.top()
}

/// `a`'s bottom edge sits strictly inside `b`.
pub fn hit_below(a: &Collider, b: &Collider, padding: i32) -> bool {
    intersects(a, b)
        && a.rect.bottom() < b.rect.bottom()
        && a.rect.bottom() > b.rect.top()
        && overlaps_horizontally(a, b, padding)
}

/// `a`'s top edge sits strictly inside `b`.
pub fn hit_above(a: &Collider, b: &Collider, padding: i32) -> bool {
    intersects(a, b)
        && a.rect.top() > b.rect.top()
        && a.rect.top() < b.rect.bottom()
        && overlaps_horizontally(a, b, padding)
}

/// `a`'s right edge sits strictly inside `b`.
pub fn hit_left(a: &Collider, b: &Collider, padding: i32) -> bool {
    intersects(a, b)
        && a.rect.right() < b.rect.right()
        && a.rect.right() > b.rect.left()
        && overlaps_vertically(a, b, padding)
}

/// `a`'s left edge sits strictly inside `b`.
pub fn hit_right(a: &Collider, b: &Collider, padding: i32) -> bool {
    intersects(a, b)
        && a.rect.left() > b.rect.left()
        && a.rect.left() < b.rect.right()
        && overlaps_vertically(a, b, padding)
}

/// Below is checked before above.
pub fn vertical_hit(a: &Collider, b: &Collider, padding: i32) -> Option<Hit> {
    if hit_below(a, b, padding) {
        Some(Hit::Below)
    } else if hit_above(a, b, padding) {
        Some(Hit::Above)
    } else {
        None
    }
}

/// Left is checked before right.
pub fn horizontal_hit(a: &Collider, b: &Collider, padding: i32) -> Option<Hit> {
    if hit_left(a, b, padding) {
        Some(Hit::Left)
    } else if hit_right(a, b, padding) {
        Some(Hit::Right)
    } else {
        None
    }
}

/// Entity-level intersection, for callers that hold both entities.
pub fn entities_intersect(a: &Entity, b: &Entity) -> bool {
    intersects(&collider(a), &collider(b))
}

/// Outcome of a push-until-clear pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    pub steps: u32,
    /// The step cap ran out while still overlapping.
    pub capped: bool,
}

/// Move `entity` by `step` until it no longer intersects `other`, at most
/// `max_steps` times.
pub fn resolve(entity: &mut Entity, other: &Collider, step: Vec2, max_steps: u32) -> Resolution {
    let mut steps = 0;
    while intersects(&collider(entity), other) {
        if steps >= max_steps {
            log::warn!(
                "collision resolution gave up after {} steps at {:?}",
                steps,
                entity.pos
            );
            return Resolution { steps, capped: true };
        }
        entity.pos += step;
        steps += 1;
    }
    Resolution {
        steps,
        capped: false,
    }
}

use std::collections::HashMap;
use glam::Vec2;

use crate::assets::manifest::AssetManifest;
use crate::components::animation::{AnimationComponent, AnimationDef};
use crate::components::rect::PixelRect;
use crate::components::sprite::{SheetId, SpriteComponent};
use crate::error::DataError;

/// Sheet, collision insets and animation table for one named sprite, ready
/// to put on an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteFrames {
    pub sheet: SheetId,
    pub inset_min: Vec2,
    pub inset_max: Vec2,
    pub animation: AnimationComponent,
}

impl SpriteFrames {
    /// Sprite component on this sheet with these insets; origin and
    /// collision are left to the caller.
    pub fn sprite(&self) -> SpriteComponent {
        SpriteComponent::new(self.sheet).with_insets(self.inset_min, self.inset_max)
    }
}

/// Registry of named sprite frame tables, built from an AssetManifest.
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteFrames>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut sprites = HashMap::with_capacity(manifest.sprites.len());
        for (name, desc) in &manifest.sprites {
            let animations = desc
                .animations
                .iter()
                .map(|frames| {
                    AnimationDef::from_frames(frames.iter().copied().map(PixelRect::from_quad).collect())
                })
                .collect();
            sprites.insert(
                name.clone(),
                SpriteFrames {
                    sheet: SheetId(desc.sheet),
                    inset_min: Vec2::from(desc.collision_inset_min),
                    inset_max: Vec2::from(desc.collision_inset_max),
                    animation: AnimationComponent::new(animations, desc.frame_duration),
                },
            );
        }
        Self { sprites }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&SpriteFrames> {
        self.sprites.get(name)
    }

    /// Like `get`, but a missing sprite is a load error.
    pub fn require(&self, name: &str) -> Result<&SpriteFrames, DataError> {
        self.get(name)
            .ok_or_else(|| DataError::MissingSprite(name.to_string()))
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

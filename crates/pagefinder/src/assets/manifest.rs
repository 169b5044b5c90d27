use std::collections::HashMap;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::sprite::SpriteComponent;
use crate::error::DataError;

/// Built-in manifest describing the stock PageFinder sprite sheets.
pub const DEFAULT_MANIFEST_JSON: &str = include_str!("default_manifest.json");

/// Asset manifest describing sprite sheets, per-sprite animation frames and
/// sound cues. Loaded from JSON; the host decodes the images and audio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// List of sprite sheets.
    pub sheets: Vec<SheetDescriptor>,
    /// Named sprite lookup: name → sheet index + animation frames.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
    /// Optional audio assets.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a single sprite sheet image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetDescriptor {
    /// Human-readable name (e.g., "characters").
    pub name: String,
    /// Relative path to the image file.
    pub path: String,
}

/// Frame metadata for a named sprite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the sheets array.
    pub sheet: u32,
    /// Seconds per frame.
    #[serde(default = "default_frame_duration")]
    pub frame_duration: f32,
    /// Animation table: each animation is a list of `[x, y, width, height]` source rects.
    pub animations: Vec<Vec<[i32; 4]>>,
    /// Fraction of the draw size trimmed off the left and top of the collision box.
    #[serde(default)]
    pub collision_inset_min: [f32; 2],
    /// Fraction trimmed off the right and bottom.
    #[serde(default)]
    pub collision_inset_max: [f32; 2],
}

impl SpriteDescriptor {
    /// True when the collision insets leave a non-empty box on both axes.
    pub fn insets_valid(&self) -> bool {
        SpriteComponent::default()
            .with_insets(
                Vec2::from(self.collision_inset_min),
                Vec2::from(self.collision_inset_max),
            )
            .insets_valid()
    }
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric cue id the simulation emits to trigger this sound.
    #[serde(default)]
    pub event_id: Option<u32>,
}

fn default_frame_duration() -> f32 {
    crate::components::animation::DEFAULT_FRAME_DURATION
}

impl AssetManifest {
    /// Parse a manifest from a JSON string and check it is usable.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// The stock manifest shipped with the crate.
    pub fn builtin() -> Result<Self, DataError> {
        Self::from_json(DEFAULT_MANIFEST_JSON)
    }

    /// Every sprite needs a real sheet, at least one non-empty animation and
    /// collision insets that leave some area.
    pub fn validate(&self) -> Result<(), DataError> {
        for (name, sprite) in &self.sprites {
            if sprite.sheet as usize >= self.sheets.len() {
                return Err(DataError::UnknownSheet {
                    name: name.clone(),
                    sheet: sprite.sheet,
                    count: self.sheets.len(),
                });
            }
            if sprite.animations.is_empty() {
                return Err(DataError::EmptyAnimation {
                    name: name.clone(),
                    index: 0,
                });
            }
            if let Some(index) = sprite.animations.iter().position(|frames| frames.is_empty()) {
                return Err(DataError::EmptyAnimation {
                    name: name.clone(),
                    index,
                });
            }
            if !sprite.insets_valid() {
                return Err(DataError::DegenerateInsets(name.clone()));
            }
        }
        Ok(())
    }

    /// Look up the cue id for a named sound.
    pub fn sound_event(&self, name: &str) -> Option<u32> {
        self.sounds.get(name).and_then(|s| s.event_id)
    }
}

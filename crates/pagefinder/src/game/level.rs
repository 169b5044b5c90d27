use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// The nine stock levels.
pub const DEFAULT_LEVELS_JSON: &str = include_str!("default_levels.json");

/// One level: platform anchor points in build order plus the goal position.
///
/// Platform order matters. Contacts are resolved in this order every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub platforms: Vec<Vec2>,
    pub goal: Vec2,
}

/// Ordered, immutable level sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub levels: Vec<LevelDef>,
}

impl LevelSet {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let set: Self = serde_json::from_str(json)?;
        if set.levels.is_empty() {
            return Err(DataError::NoLevels);
        }
        Ok(set)
    }

    pub fn builtin() -> Result<Self, DataError> {
        Self::from_json(DEFAULT_LEVELS_JSON)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    /// Total platforms over every level.
    pub fn platform_count(&self) -> usize {
        self.levels.iter().map(|l| l.platforms.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_nine_levels() {
        let set = LevelSet::builtin().unwrap();
        assert_eq!(set.len(), 9);
        assert_eq!(set.levels[0].goal, Vec2::new(200.0, 200.0));
        assert_eq!(set.levels[0].platforms[0], Vec2::new(49.0, 440.0));
        assert_eq!(set.levels[8].goal, Vec2::new(810.0, 500.0));
        assert_eq!(set.levels[8].platforms.len(), 1);
    }

    #[test]
    fn parses_minimal_level() {
        let set = LevelSet::from_json(r#"{ "levels": [ { "platforms": [[1, 2]], "goal": [3, 4] } ] }"#).unwrap();
        assert_eq!(set.levels[0].platforms, vec![Vec2::new(1.0, 2.0)]);
        assert_eq!(set.platform_count(), 1);
    }

    #[test]
    fn empty_level_set_is_rejected() {
        assert!(matches!(
            LevelSet::from_json(r#"{ "levels": [] }"#),
            Err(DataError::NoLevels)
        ));
    }

    #[test]
    fn missing_goal_is_a_json_error() {
        assert!(matches!(
            LevelSet::from_json(r#"{ "levels": [ { "platforms": [] } ] }"#),
            Err(DataError::Json(_))
        ));
    }
}

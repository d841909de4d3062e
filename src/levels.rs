//! Level pack loading
//!
//! A pack is a JSON file of the form `{ "levels": [ ... ] }`. Individual
//! levels may omit any field; defaults are applied when each level is built.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::sim::LevelDef;

/// Pack compiled into the binary, used when no file is given
const BUILTIN_LEVELS: &str = include_str!("../assets/levels.json");

/// An ordered list of levels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelPack {
    pub levels: Vec<LevelDef>,
}

impl LevelPack {
    pub fn from_json(json: &str) -> Result<Self> {
        let pack: LevelPack = serde_json::from_str(json).context("parsing level pack")?;
        Ok(pack)
    }

    /// Load a pack from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading level pack {}", path.display()))?;
        let pack = Self::from_json(&json).with_context(|| format!("in {}", path.display()))?;
        log::info!("Loaded {} levels from {}", pack.len(), path.display());
        Ok(pack)
    }

    /// The pack shipped with the game
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LEVELS)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level names, in order (for a level-select HUD)
    pub fn names(&self) -> Vec<&str> {
        self.levels.iter().map(|l| l.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pack_parses() {
        let pack = LevelPack::builtin().unwrap();
        assert_eq!(pack.len(), 3);
        assert_eq!(pack.names(), vec!["Intro Steps", "Moon Hops", "Narrow Ledges"]);
        assert_eq!(pack.levels[0].start.y, 220.0);
        // Third level relies on defaults
        assert_eq!(pack.levels[2].gravity, 0.65);
        assert_eq!(pack.levels[2].theme.blob, "#1478FF");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.json");
        std::fs::write(
            &path,
            r#"{ "levels": [ { "name": "Only", "platforms": [ { "x": 0, "y": 300, "w": 50, "h": 10 } ] } ] }"#,
        )
        .unwrap();

        let pack = LevelPack::load(&path).unwrap();
        assert_eq!(pack.len(), 1);
        assert_eq!(pack.levels[0].platforms.len(), 1);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = LevelPack::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(LevelPack::from_json("{ \"levels\": 3 }").is_err());
    }

    #[test]
    fn test_null_level_fields_are_defaulted() {
        let pack = LevelPack::from_json(
            r#"{ "levels": [ { "name": null, "gravity": null, "start": { "y": null } } ] }"#,
        )
        .unwrap();
        assert_eq!(pack.len(), 1);
        assert_eq!(pack.levels[0].name, "");
        assert_eq!(pack.levels[0].gravity, 0.65);
        assert_eq!(pack.levels[0].start.y, 180.0);
    }

    #[test]
    fn test_missing_levels_key_is_empty_pack() {
        let pack = LevelPack::from_json("{}").unwrap();
        assert!(pack.is_empty());
    }
}

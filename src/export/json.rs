use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{LootError, Result};
use crate::types::{Item, Level, TraderLevel};

pub const ITEMS_FILE: &str = "items.json";
pub const LEVELS_FILE: &str = "levels.json";
pub const TRADERS_FILE: &str = "traders.json";

/// Serialize `value` as pretty-printed JSON to `path`.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| LootError::Export {
        message: format!("Failed to serialize {}: {}", path.display(), e),
        help: None,
    })?;

    fs::write(path, json).map_err(|e| LootError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write dataset: {}", e),
    })
}

/// Write `items.json` into `destination`.
pub fn write_items<'a>(items: impl IntoIterator<Item = &'a Item>, destination: &Path) -> Result<PathBuf> {
    let items: Vec<&Item> = items.into_iter().collect();
    let path = destination.join(ITEMS_FILE);
    write_json(&items, &path)?;
    Ok(path)
}

/// Write `levels.json` into `destination`.
pub fn write_levels(levels: &[Level], destination: &Path) -> Result<PathBuf> {
    let path = destination.join(LEVELS_FILE);
    write_json(levels, &path)?;
    Ok(path)
}

/// Write `traders.json` into `destination`.
pub fn write_traders(traders: &[TraderLevel], destination: &Path) -> Result<PathBuf> {
    let path = destination.join(TRADERS_FILE);
    write_json(traders, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Character, ItemData};
    use tempfile::tempdir;

    #[test]
    fn test_write_items_is_pascal_case_array() {
        let dir = tempdir().unwrap();
        let item = Item::new(
            "key-1",
            "ARM_Leather",
            "a.lsx",
            ItemData {
                icon: Some("Item_ARM_Leather".to_string()),
                ..Default::default()
            },
        );

        let path = write_items([&item], dir.path()).unwrap();

        assert_eq!(path, dir.path().join(ITEMS_FILE));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  {"));
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json[0]["MapKey"], "key-1");
        assert_eq!(json[0]["Data"]["Icon"], "Item_ARM_Leather");
        assert!(json[0]["Data"].get("Stats").is_none());
    }

    #[test]
    fn test_write_levels() {
        let dir = tempdir().unwrap();
        let level = Level {
            name: "Druid Grove".to_string(),
            id: "DEN_Main_A".to_string(),
            characters: vec![Character::new("c1", "S_DEN_Arron")],
        };

        let path = write_levels(&[level], dir.path()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json[0]["Name"], "Druid Grove");
        assert_eq!(json[0]["Characters"][0]["MapKey"], "c1");
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does/not/exist");

        let err = write_traders(&[], &missing).unwrap_err();
        assert!(matches!(err, LootError::Io { .. }));
    }
}

//! Load-order manifest (lootgen.yaml) parsing.
//!
//! The manifest is optional. Without one, the built-in load orders for the
//! unpacked `Shared` and `Gustav` packages are used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LootError, Result};

/// Load orders and fixed file locations, relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Localization document.
    pub localization: PathBuf,

    /// Roots holding `Tags/` and `RootTemplates/`, lowest precedence first.
    pub templates: Vec<String>,

    /// Roots holding `Globals/`, `Levels/` and `Localization/Levels.lsx`,
    /// lowest precedence first.
    pub levels: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            localization: PathBuf::from("English/Localization/English/english.xml"),
            templates: vec![
                "Shared/Public/Shared".to_string(),
                "Shared/Public/SharedDev".to_string(),
                "Gustav/Public/Gustav".to_string(),
                "Gustav/Public/GustavDev".to_string(),
            ],
            levels: vec![
                "Gustav/Mods/Gustav".to_string(),
                "Gustav/Mods/GustavDev".to_string(),
            ],
        }
    }
}

impl Manifest {
    /// Load manifest from a lootgen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LootError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| LootError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check lootgen.yaml syntax".to_string()),
        })?;

        Ok(manifest.normalized())
    }

    /// Rewrite Windows separators so paths join correctly on every platform.
    fn normalized(self) -> Self {
        Self {
            localization: PathBuf::from(normalize_separators(&self.localization.to_string_lossy())),
            templates: self.templates.iter().map(|s| normalize_separators(s)).collect(),
            levels: self.levels.iter().map(|s| normalize_separators(s)).collect(),
        }
    }
}

/// Replace `\` separators with `/`.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_load_orders() {
        let manifest = Manifest::default();

        assert_eq!(manifest.templates.len(), 4);
        assert_eq!(manifest.templates[0], "Shared/Public/Shared");
        assert_eq!(manifest.templates[3], "Gustav/Public/GustavDev");
        assert_eq!(manifest.levels, vec!["Gustav/Mods/Gustav", "Gustav/Mods/GustavDev"]);
    }

    #[test]
    fn test_parse_partial_manifest_keeps_defaults() {
        let manifest = Manifest::parse("levels:\n  - Mods\\MyMod\n").unwrap();

        assert_eq!(manifest.levels, vec!["Mods/MyMod"]);
        assert_eq!(manifest.templates, Manifest::default().templates);
        assert_eq!(manifest.localization, Manifest::default().localization);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
localization: French/Localization/French/french.xml
templates:
  - Shared/Public/Shared
  - MyMod/Public/MyMod
levels:
  - MyMod/Mods/MyMod
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(
            manifest.localization,
            PathBuf::from("French/Localization/French/french.xml")
        );
        assert_eq!(manifest.templates, vec!["Shared/Public/Shared", "MyMod/Public/MyMod"]);
        assert_eq!(manifest.levels, vec!["MyMod/Mods/MyMod"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        assert!(Manifest::parse("templates: 12").is_err());
    }
}

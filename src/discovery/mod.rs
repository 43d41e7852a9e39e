//! Source tree discovery for unpacked game data.
//!
//! This module locates the load-order roots inside the source directory and
//! enumerates definition files across them.
//!
//! # Example
//!
//! ```ignore
//! use lootgen::discovery::{collect, discover, ROOT_TEMPLATES_DIR};
//!
//! let tree = discover("./unpacked")?;
//! let files = collect(&tree.template_roots(), ROOT_TEMPLATES_DIR);
//! println!("Found {} template files", files.len());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{LootError, Result};

pub use manifest::{normalize_separators, Manifest};
pub use scanner::{collect, is_definition_file, scan_directory, subdirectory_names, DEFINITION_EXTENSION};

/// The name of the optional manifest file in the source root.
pub const MANIFEST_FILENAME: &str = "lootgen.yaml";

/// Tag definitions below each template root.
pub const TAGS_DIR: &str = "Tags";
/// Item root templates below each template root.
pub const ROOT_TEMPLATES_DIR: &str = "RootTemplates";
/// Level-independent placements below each level root.
pub const GLOBALS_DIR: &str = "Globals";
/// Per-level placements below each level root.
pub const LEVELS_DIR: &str = "Levels";
/// Character placements below each level directory.
pub const CHARACTERS_DIR: &str = "Characters";
/// Level name table below each level root.
pub const LEVEL_NAMES_FILE: &str = "Localization/Levels.lsx";

/// A discovered source directory with its load orders.
#[derive(Debug, Clone)]
pub struct SourceTree {
    /// The source root directory.
    pub root: PathBuf,

    /// The effective manifest (default if no lootgen.yaml found).
    pub manifest: Manifest,

    /// Whether a lootgen.yaml manifest was found.
    pub has_manifest: bool,
}

impl SourceTree {
    /// Create a source tree with an explicit manifest.
    pub fn new(root: impl Into<PathBuf>, manifest: Manifest) -> Self {
        Self {
            root: root.into(),
            manifest,
            has_manifest: false,
        }
    }

    /// Absolute path of the localization document.
    pub fn localization_path(&self) -> PathBuf {
        self.root.join(&self.manifest.localization)
    }

    /// Template roots in load order.
    pub fn template_roots(&self) -> Vec<PathBuf> {
        self.manifest.templates.iter().map(|r| self.root.join(r)).collect()
    }

    /// Level roots in load order.
    pub fn level_roots(&self) -> Vec<PathBuf> {
        self.manifest.levels.iter().map(|r| self.root.join(r)).collect()
    }

    /// Path relative to the source root with forward slashes, for provenance.
    pub fn relative(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        normalize_separators(&relative.to_string_lossy())
            .trim_start_matches('/')
            .to_string()
    }
}

/// Discover the source tree rooted at `root`.
///
/// A missing root is fatal. A `lootgen.yaml` in the root overrides the
/// built-in load orders.
pub fn discover(root: impl AsRef<Path>) -> Result<SourceTree> {
    let root = root.as_ref().to_path_buf();

    if !root.is_dir() {
        return Err(LootError::Source {
            message: format!("Source directory not found: {}", root.display()),
            help: Some("Point lootgen at the directory holding the unpacked Shared, Gustav and English packages".to_string()),
        });
    }

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    Ok(SourceTree {
        root,
        manifest,
        has_manifest,
    })
}

/// Turn a user-supplied path using either separator style into a path.
pub fn normalize_path(path: &str) -> PathBuf {
    PathBuf::from(normalize_separators(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();

        let tree = discover(dir.path()).unwrap();

        assert!(!tree.has_manifest);
        assert_eq!(tree.manifest, Manifest::default());
        assert_eq!(tree.template_roots()[0], dir.path().join("Shared/Public/Shared"));
        assert_eq!(
            tree.localization_path(),
            dir.path().join("English/Localization/English/english.xml")
        );
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            "levels:\n  - MyMod/Mods/MyMod\n",
        )
        .unwrap();

        let tree = discover(dir.path()).unwrap();

        assert!(tree.has_manifest);
        assert_eq!(tree.level_roots(), vec![dir.path().join("MyMod/Mods/MyMod")]);
    }

    #[test]
    fn test_discover_missing_root() {
        let result = discover("/nonexistent/unpacked");
        assert!(matches!(result, Err(LootError::Source { .. })));
    }

    #[test]
    fn test_relative_path() {
        let tree = SourceTree::new("/data/unpacked", Manifest::default());
        let path = Path::new("/data/unpacked/Gustav/Public/Gustav/RootTemplates/a.lsx");
        assert_eq!(tree.relative(path), "Gustav/Public/Gustav/RootTemplates/a.lsx");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("C:\\games\\bg3\\unpacked"), PathBuf::from("C:/games/bg3/unpacked"));
        assert_eq!(normalize_path("out/data"), PathBuf::from("out/data"));
    }
}

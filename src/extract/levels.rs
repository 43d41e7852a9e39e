//! Per-level character extraction.
//!
//! A level's characters live in `Globals/<level>/Characters` and
//! `Levels/<level>/Characters` of every level root. All of them are merged
//! into one table per level, in load order.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::diagnostics::Report;
use crate::discovery::{collect, subdirectory_names, SourceTree, CHARACTERS_DIR, GLOBALS_DIR, LEVELS_DIR};
use crate::lookup::Lookups;
use crate::registry::LayeredTable;
use crate::types::Character;

use super::extract_characters;

/// Level identifiers found under `Globals/` and `Levels/` of every level
/// root, deduplicated, in discovery order.
pub fn level_ids(level_roots: &[PathBuf]) -> Vec<String> {
    let mut seen = HashSet::new();
    level_roots
        .iter()
        .flat_map(|root| {
            subdirectory_names(&root.join(GLOBALS_DIR))
                .into_iter()
                .chain(subdirectory_names(&root.join(LEVELS_DIR)))
        })
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Character files of one level across the load order.
pub fn level_character_files(level_roots: &[PathBuf], level_id: &str) -> Vec<PathBuf> {
    let level_dirs: Vec<PathBuf> = level_roots
        .iter()
        .flat_map(|root| {
            [
                root.join(GLOBALS_DIR).join(level_id),
                root.join(LEVELS_DIR).join(level_id),
            ]
        })
        .collect();

    collect(&level_dirs, CHARACTERS_DIR)
}

/// Extract the merged character table of every level, keyed by level id.
pub fn extract_levels(
    tree: &SourceTree,
    lookups: &Lookups,
    report: &mut Report,
) -> LayeredTable<LayeredTable<Character>> {
    let roots = tree.level_roots();

    level_ids(&roots)
        .into_iter()
        .map(|id| {
            let files = level_character_files(&roots, &id);
            let characters = extract_characters(&files, tree, lookups, report);
            (id, characters)
        })
        .collect()
}

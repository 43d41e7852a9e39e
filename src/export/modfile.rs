//! Proof-of-concept mod generation.
//!
//! Every armour template that does not declare its own stats gets a
//! generated stats entry that reuses the inherited stats. All armour stats
//! are then added to a treasure table, one subtable each.

use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnostics::Report;
use crate::error::{LootError, Result};
use crate::registry::{resolve_attribute, LayeredTable};
use crate::types::Item;
use crate::views::inherits_from;

/// Ancestor name that marks an item as armour.
pub const ARMOR_ROOT: &str = "BASE_ARMOR";
/// Prefix of generated stats entry names.
pub const GENERATED_PREFIX: &str = "LIA_GENERATED_";
/// Treasure table the armour is added to.
pub const TREASURE_TABLE: &str = "TUT_Chest_Potions";

pub const ARMOUR_FILE: &str = "Armour.txt";
pub const TREASURE_FILE: &str = "TreasureTable.txt";

/// Generated mod text, one string per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArmourMod {
    pub armour: Vec<String>,
    pub treasure: Vec<String>,
}

impl ArmourMod {
    /// Build the mod entries from a resolved item table.
    ///
    /// Armour without direct or inherited stats is reported and left out.
    pub fn generate(items: &LayeredTable<Item>, report: &mut Report) -> Self {
        let (with_stats, without_stats): (Vec<&Item>, Vec<&Item>) = inherits_from(items, ARMOR_ROOT)
            .into_iter()
            .partition(|a| a.data.stats.as_deref().is_some_and(|s| !s.trim().is_empty()));

        let mut stat_names: Vec<String> = with_stats
            .iter()
            .filter_map(|a| a.data.stats.clone())
            .collect();

        let mut armour = Vec::new();
        for item in without_stats {
            let Some(stats) = resolve_attribute(item, items, "Stats", |d| d.stats.as_deref(), report) else {
                continue;
            };
            let name = format!("{}{}", GENERATED_PREFIX, item.name);
            armour.push(stats_entry(&name, stats, &item.map_key));
            stat_names.push(name);
        }

        let treasure = std::iter::once(format!(
            "new treasuretable \"{}\"\nCanMerge 1",
            TREASURE_TABLE
        ))
        .chain(stat_names.iter().map(|s| treasure_subtable(s)))
        .collect();

        Self { armour, treasure }
    }

    /// Contents of `Armour.txt`.
    pub fn armour_text(&self) -> String {
        self.armour.join("\n")
    }

    /// Contents of `TreasureTable.txt`.
    pub fn treasure_text(&self) -> String {
        self.treasure.join("\n")
    }

    /// Write both mod files into `destination`.
    pub fn write(&self, destination: &Path) -> Result<Vec<PathBuf>> {
        let files = [
            (destination.join(ARMOUR_FILE), self.armour_text()),
            (destination.join(TREASURE_FILE), self.treasure_text()),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (path, text) in files {
            fs::write(&path, text).map_err(|e| LootError::Io {
                path: path.clone(),
                message: format!("Failed to write mod file: {}", e),
            })?;
            written.push(path);
        }

        Ok(written)
    }
}

fn stats_entry(name: &str, using: &str, map_key: &str) -> String {
    format!(
        "new entry \"{}\"\nusing \"{}\"\ndata \"RootTemplate\" \"{}\"\ndata \"Unique\" \"0\"\n",
        name, using, map_key
    )
}

fn treasure_subtable(stat_name: &str) -> String {
    format!(
        "new subtable \"1,1\"\nobject category \"I_{}\",1,0,0,0,0,0,0,0",
        stat_name
    )
}

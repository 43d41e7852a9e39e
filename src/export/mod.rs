//! Output artifacts written to the destination directory.

mod json;
mod modfile;

pub use json::{write_items, write_json, write_levels, write_traders, ITEMS_FILE, LEVELS_FILE, TRADERS_FILE};
pub use modfile::{ArmourMod, ARMOR_ROOT, ARMOUR_FILE, GENERATED_PREFIX, TREASURE_FILE, TREASURE_TABLE};

//! Read-only views over resolved tables.
//!
//! Views never modify the tables they read. An empty result is valid.

mod levels;

use std::collections::BTreeMap;

use crate::registry::LayeredTable;
use crate::types::Item;

pub use levels::{group_levels, trader_roster, TRADER_TAG};

/// Items whose ancestry contains `root_name`.
pub fn inherits_from<'a>(items: &'a LayeredTable<Item>, root_name: &str) -> Vec<&'a Item> {
    items.values().filter(|i| i.inherits_from(root_name)).collect()
}

/// Items grouped by their farthest ancestor, or their own name when they
/// have none.
pub fn group_by_root(items: &LayeredTable<Item>) -> BTreeMap<String, Vec<&Item>> {
    let mut groups: BTreeMap<String, Vec<&Item>> = BTreeMap::new();

    for item in items.values() {
        let root = item.ancestry().last().unwrap_or(&item.name);
        groups.entry(root.clone()).or_default().push(item);
    }

    groups
}

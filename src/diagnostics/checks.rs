//! Consistency checks over a resolved item table.
//!
//! Each check takes the table and returns a `Report`.

use std::collections::BTreeMap;

use crate::registry::LayeredTable;
use crate::types::Item;

use super::report::{Diagnostic, Report};

/// Warn about names shared by more than one template.
///
/// Ancestry lists names, so a shared name makes the ancestry of every
/// descendant ambiguous to readers of `items.json`.
pub fn check_duplicate_names(items: &LayeredTable<Item>) -> Report {
    let mut report = Report::new();
    let mut by_name: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for item in items.values() {
        by_name.entry(&item.name).or_default().push(&item.map_key);
    }

    for (name, keys) in by_name {
        if keys.len() > 1 {
            report.push(
                Diagnostic::warning(
                    "lootgen::check::duplicate-name",
                    format!("Name '{}' is used by {} templates: {}", name, keys.len(), keys.join(", ")),
                )
                .with_help("Ancestry entries with this name cannot be told apart"),
            );
        }
    }

    report
}

/// Report each parent key that does not exist in the table, once.
pub fn check_dangling_parents(items: &LayeredTable<Item>) -> Report {
    let mut report = Report::new();
    let mut missing: BTreeMap<&str, usize> = BTreeMap::new();

    for item in items.values() {
        if let Some(parent) = item.parent_key() {
            if parent != item.map_key && !items.contains_key(parent) {
                *missing.entry(parent).or_default() += 1;
            }
        }
    }

    for (key, count) in missing {
        report.push(
            Diagnostic::warning(
                "lootgen::check::dangling-parent",
                format!("Parent template '{}' is referenced by {} template(s) but never defined", key, count),
            )
            .with_help("Check that every root in the load order is unpacked"),
        );
    }

    report
}

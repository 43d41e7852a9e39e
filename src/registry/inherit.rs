//! Parent-template inheritance resolution.
//!
//! Every item may name a parent by key. Walking that chain gives the item's
//! ancestry (nearest first) and the union of tags declared along the way.

use std::collections::HashSet;

use crate::diagnostics::{Diagnostic, Report};
use crate::types::{Item, ResolvedData};

use super::LayeredTable;

/// Counts gathered while resolving a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub resolved: usize,
    pub with_ancestry: usize,
    pub dangling: usize,
    pub cycles: usize,
}

/// Outcome of walking one item's parent chain.
#[derive(Debug, Default)]
struct Walk {
    names: Vec<String>,
    keys: Vec<String>,
    tags: Vec<String>,
    dangling: bool,
    cycle_at: Option<String>,
}

/// Fill `resolved_data` of every item in the table.
///
/// Only declared fields are read, so resolving an already resolved table
/// gives the same result.
pub fn resolve_inheritance(items: &mut LayeredTable<Item>, report: &mut Report) -> ResolveSummary {
    let table: &LayeredTable<Item> = items;
    let walks: Vec<(String, Walk)> = table
        .iter()
        .map(|(key, item)| (key.to_string(), walk_parents(item, table)))
        .collect();

    let mut summary = ResolveSummary::default();

    for (key, walk) in walks {
        let Some(item) = items.get_mut(&key) else {
            continue;
        };

        if walk.dangling {
            summary.dangling += 1;
        }
        if let Some(revisited) = &walk.cycle_at {
            summary.cycles += 1;
            report.push(
                Diagnostic::warning(
                    "lootgen::resolve::cycle",
                    format!(
                        "Parent chain of '{}' ({}) loops back to '{}'",
                        item.name, item.map_key, revisited
                    ),
                )
                .in_source(item.path.clone())
                .with_help("Ancestry was cut at the first repeated template"),
            );
        }

        item.resolved_data = finalize(&item.name, item.own_tags(), walk);
        summary.resolved += 1;
        if item.resolved_data.parents.is_some() {
            summary.with_ancestry += 1;
        }
    }

    summary
}

fn walk_parents(item: &Item, items: &LayeredTable<Item>) -> Walk {
    let mut walk = Walk::default();
    let mut visited = HashSet::from([item.map_key.as_str()]);
    let mut current = item;

    while let Some(next) = current.parent_key() {
        if next == current.map_key {
            break;
        }
        if !visited.insert(next) {
            walk.cycle_at = Some(next.to_string());
            break;
        }

        match items.get(next) {
            Some(parent) => {
                walk.names.push(parent.name.clone());
                walk.keys.push(parent.map_key.clone());
                walk.tags.extend(parent.own_tags().iter().cloned());
                current = parent;
            }
            None => {
                walk.names.push(next.to_string());
                walk.keys.push(next.to_string());
                walk.dangling = true;
                break;
            }
        }
    }

    walk
}

fn finalize(own_name: &str, own_tags: &[String], walk: Walk) -> ResolvedData {
    let parents = distinct(walk.names.into_iter().filter(|n| n != own_name));
    let tags = distinct(own_tags.iter().cloned().chain(walk.tags));

    ResolvedData {
        parents: (!parents.is_empty()).then_some(parents),
        tags: (!tags.is_empty()).then_some(tags),
        parent_keys: walk.keys,
    }
}

fn distinct(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

use std::path::PathBuf;

use crate::diagnostics::Report;
use crate::discovery::SourceTree;
use crate::lookup::Lookups;
use crate::parser::{parse_lsx_file, Document};
use crate::registry::LayeredTable;
use crate::types::{Item, ItemData};

use super::{game_objects, report_unreadable, required_identity, tags, text, value, ITEM_TYPE};

/// Extract item templates from root-template files given in load order.
///
/// A later file's record replaces an earlier record with the same `MapKey`.
/// Unreadable files and incomplete records are reported and skipped.
pub fn extract_items(
    files: &[PathBuf],
    tree: &SourceTree,
    lookups: &Lookups,
    report: &mut Report,
) -> LayeredTable<Item> {
    let mut table = LayeredTable::new();

    for path in files {
        let source = tree.relative(path);
        match parse_lsx_file(path) {
            Ok(doc) => {
                for item in items_from_document(&doc, &source, lookups, report) {
                    table.insert_or_replace(item.map_key.clone(), item);
                }
            }
            Err(e) => report_unreadable(report, source, e),
        }
    }

    table
}

/// Extract the item records of one parsed document, in document order.
pub fn items_from_document(
    doc: &Document,
    source: &str,
    lookups: &Lookups,
    report: &mut Report,
) -> Vec<Item> {
    let mut items = Vec::new();

    for node in game_objects(doc, ITEM_TYPE) {
        let Some((map_key, name)) = required_identity(node, ITEM_TYPE, source, report) else {
            continue;
        };

        let data = ItemData {
            display_name: text(node, "DisplayName", lookups),
            description: text(node, "Description", lookups),
            technical_description: text(node, "TechnicalDescription", lookups),
            parent_template_id: value(node, "ParentTemplateId"),
            visual_template_id: value(node, "VisualTemplate"),
            stats: value(node, "Stats"),
            icon: value(node, "Icon"),
            tags: tags(node, lookups),
        };

        items.push(Item::new(map_key, name, source, data));
    }

    items
}

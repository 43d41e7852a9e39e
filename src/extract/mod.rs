//! Entity extraction from template documents.
//!
//! Every subsystem reads the same record shape: `GameObjects` nodes under
//! `region[Templates]`, discriminated by their `Type` attribute. Extractors
//! turn qualifying records into typed entities and merge them into a
//! [`LayeredTable`](crate::registry::LayeredTable) in load order.

mod characters;
mod items;
mod levels;

use crate::diagnostics::{Diagnostic, Report};
use crate::lookup::Lookups;
use crate::parser::{Document, Node};

pub use characters::{characters_from_document, extract_characters};
pub use items::{extract_items, items_from_document};
pub use levels::{extract_levels, level_character_files, level_ids};

/// Discriminator of item records.
pub const ITEM_TYPE: &str = "item";
/// Discriminator of character records.
pub const CHARACTER_TYPE: &str = "character";

/// Records of the given type in a template document.
pub fn game_objects<'a>(doc: &'a Document, kind: &'a str) -> impl Iterator<Item = &'a Node> {
    doc.region_nodes("Templates")
        .flat_map(|node| node.children_named("GameObjects"))
        .filter(move |node| node.value("Type") == Some(kind))
}

/// Non-blank attribute value.
fn value(node: &Node, id: &str) -> Option<String> {
    node.value(id)
        .filter(|v| !v.trim().is_empty())
        .map(String::from)
}

/// Localized text of a translated-string attribute, or its raw handle.
fn text(node: &Node, id: &str, lookups: &Lookups) -> Option<String> {
    node.handle(id)
        .filter(|h| !h.trim().is_empty())
        .map(|h| lookups.text(h))
}

/// Tag names of a record, mapped through the tag table.
fn tags(node: &Node, lookups: &Lookups) -> Option<Vec<String>> {
    non_empty(
        node.grouped_values("Tags", "Tag")
            .map(|guid| lookups.tag(guid))
            .collect(),
    )
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Read the required `MapKey` and `Name` of a record.
///
/// Reports a diagnostic and returns `None` when either is missing.
fn required_identity(
    node: &Node,
    kind: &str,
    source: &str,
    report: &mut Report,
) -> Option<(String, String)> {
    let map_key = value(node, "MapKey");
    let name = value(node, "Name");

    match (map_key, name) {
        (Some(map_key), Some(name)) => Some((map_key, name)),
        (None, name) => {
            report.push(
                Diagnostic::warning(
                    "lootgen::extract::missing-key",
                    format!(
                        "Skipped {} record without MapKey (Name: {})",
                        kind,
                        name.as_deref().unwrap_or("<none>")
                    ),
                )
                .in_source(source),
            );
            None
        }
        (Some(map_key), None) => {
            report.push(
                Diagnostic::warning(
                    "lootgen::extract::missing-name",
                    format!("Skipped {} record '{}' without Name", kind, map_key),
                )
                .in_source(source),
            );
            None
        }
    }
}

/// Report a definition file that could not be read or parsed.
fn report_unreadable(report: &mut Report, source: String, error: crate::error::LootError) {
    report.push(
        Diagnostic::error("lootgen::parse::template", error.to_string())
            .in_source(source)
            .with_help("The file was skipped; records it defines are missing from the output"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_lsx;

    #[test]
    fn test_game_objects_filters_by_type() {
        let doc = parse_lsx(
            r#"<save><region id="Templates"><node id="Templates"><children>
                <node id="GameObjects"><attribute id="Type" value="item"/></node>
                <node id="GameObjects"><attribute id="Type" value="character"/></node>
                <node id="GameObjects"><attribute id="Type" value="item"/></node>
                <node id="Other"><attribute id="Type" value="item"/></node>
            </children></node></region></save>"#,
        )
        .unwrap();

        assert_eq!(game_objects(&doc, ITEM_TYPE).count(), 2);
        assert_eq!(game_objects(&doc, CHARACTER_TYPE).count(), 1);
        assert_eq!(game_objects(&doc, "scenery").count(), 0);
    }
}
